//! Error types returned by table construction and removal

use thiserror::Error;

use crate::Key;

/// Why a lookup-and-remove operation produced no item.
///
/// Neither variant indicates a corrupted table; the table is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No live item with the requested key was reached by probing or walking the chain
    #[error("key {0} is not present")]
    NotFound(Key),
    /// The table or chain holds no live items
    #[error("container is empty")]
    EmptyContainer,
}

/// Rejected construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An open-addressing table needs at least one slot
    #[error("capacity must be at least 1")]
    ZeroCapacity,
    /// A chained table needs at least one bucket
    #[error("bucket count must be at least 1")]
    ZeroBuckets,
    /// The secondary hash constant must be at least 2
    #[error("step prime must be at least 2, got {0}")]
    StepPrimeTooSmall(usize),
    /// The secondary hash constant must be prime
    #[error("step prime {0} is not prime")]
    StepNotPrime(usize),
    /// The secondary hash constant must be smaller than the table
    #[error("step prime {step_prime} must be less than capacity {capacity}")]
    StepPrimeTooLarge {
        /// Configured secondary hash constant
        step_prime: usize,
        /// Configured initial capacity
        capacity: usize,
    },
}
