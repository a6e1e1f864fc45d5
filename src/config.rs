//! Construction parameters for [`OpenAddressingTable`](crate::OpenAddressingTable)

use crate::ConfigError;

/// Initial number of slots when none is given
pub const DEFAULT_CAPACITY: usize = 13;
/// Secondary hash constant when none is given
pub const DEFAULT_STEP_PRIME: usize = 5;

/// Parameters for an open-addressing table.
///
/// The step prime `C` drives the secondary hash `C - key % C`. It has to be prime and smaller
/// than the initial capacity. A capacity that is a multiple of `C` is accepted, but some probe
/// sequences will then not reach every slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenAddressingConfig {
    /// Initial number of slots
    capacity: usize,
    /// Secondary hash constant
    step_prime: usize,
}

impl Default for OpenAddressingConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_CAPACITY, step_prime: DEFAULT_STEP_PRIME }
    }
}

impl OpenAddressingConfig {
    /// Creates the default configuration (13 slots, step prime 5)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial capacity
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the secondary hash constant
    #[must_use]
    pub const fn with_step_prime(mut self, step_prime: usize) -> Self {
        self.step_prime = step_prime;
        self
    }

    /// Returns the initial capacity
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the secondary hash constant
    #[must_use]
    pub const fn step_prime(&self) -> usize {
        self.step_prime
    }

    /// Checks the parameters against the table's requirements.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the capacity is zero, or the step prime is below 2,
    /// not prime, or not smaller than the capacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.step_prime < 2 {
            return Err(ConfigError::StepPrimeTooSmall(self.step_prime));
        }
        if !is_prime(self.step_prime) {
            return Err(ConfigError::StepNotPrime(self.step_prime));
        }
        if self.step_prime >= self.capacity {
            return Err(ConfigError::StepPrimeTooLarge {
                step_prime: self.step_prime,
                capacity: self.capacity,
            });
        }
        if shares_factor(self.capacity, self.step_prime) {
            log::warn!(
                "capacity {} is a multiple of step prime {}; some probe sequences will skip slots",
                self.capacity,
                self.step_prime
            );
        }
        Ok(())
    }
}

/// Returns true when `capacity` is a multiple of the (non-zero) `step_prime`
#[allow(clippy::arithmetic_side_effects)]
fn shares_factor(capacity: usize, step_prime: usize) -> bool {
    capacity % step_prime == 0
}

/// Trial division primality check
#[allow(clippy::arithmetic_side_effects)]
fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor: usize = 2;
    while divisor.saturating_mul(divisor) <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}
