use std::mem;

use crate::{
    ConfigError, Item, Key, LookupError, OpenAddressingConfig, SlotReporter, SlotState,
    config::{DEFAULT_CAPACITY, DEFAULT_STEP_PRIME},
};

/// One position of the backing array
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot<V> {
    /// Never written; probing stops here
    Empty,
    /// Deleted item marker; probing continues past it and insertion may reuse it
    Tombstone,
    /// A live item
    Occupied(Item<V>),
}

impl<V> Slot<V> {
    /// Returns true if an insert may store an item here
    const fn is_vacant(&self) -> bool {
        matches!(self, Self::Empty | Self::Tombstone)
    }

    /// Returns the externally visible state of the slot
    const fn state(&self) -> SlotState {
        match self {
            Self::Empty => SlotState::Empty,
            Self::Tombstone => SlotState::Tombstone,
            Self::Occupied(item) => SlotState::Occupied(item.key()),
        }
    }
}

/// Allocates `capacity` empty slots
fn empty_slots<V>(capacity: usize) -> Vec<Slot<V>> {
    std::iter::repeat_with(|| Slot::Empty).take(capacity).collect()
}

/// The double-hashing probe sequence for one key.
///
/// Yields `(home + i * step) % capacity` for `i = 0, 1, ..` and stops after `capacity` slots,
/// which is enough to cover the whole cycle the step can reach.
#[derive(Debug, Clone)]
struct Probe {
    /// Next slot to yield
    index: usize,
    /// Distance between consecutive slots
    step: usize,
    /// Number of slots in the table being probed
    capacity: usize,
    /// Slots left before the sequence ends
    remaining: usize,
}

impl Iterator for Probe {
    type Item = usize;

    #[allow(clippy::arithmetic_side_effects)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.index;
        self.index = (self.index + self.step) % self.capacity;
        Some(current)
    }
}

/// A hash table resolving collisions by open addressing with double hashing.
///
/// An item with key `k` lives on the probe sequence starting at `k % capacity` and advancing by
/// `C - k % C`, where `C` is the step prime. Deleted slots become tombstones so later probes keep
/// walking past them. When every slot holds a live item, the next insert first doubles the
/// capacity and re-inserts every live item.
///
/// Duplicate keys are not detected: the copy reached first along the probe sequence is the one
/// `find` and `delete` act on.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct OpenAddressingTable<V = ()> {
    /// The backing array
    slots: Vec<Slot<V>>,
    /// Number of live items
    len: usize,
    /// Secondary hash constant `C`
    step_prime: usize,
}

impl<V> Default for OpenAddressingTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<Item<V>> for OpenAddressingTable<V> {
    fn extend<T: IntoIterator<Item = Item<V>>>(&mut self, iter: T) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<V> OpenAddressingTable<V> {
    /// Creates a table with 13 slots and step prime 5
    #[must_use]
    pub fn new() -> Self {
        Self { slots: empty_slots(DEFAULT_CAPACITY), len: 0, step_prime: DEFAULT_STEP_PRIME }
    }

    /// Creates a table with the given initial capacity and the default step prime
    ///
    /// # Errors
    ///
    /// Fails if the capacity is not larger than the default step prime.
    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_config(OpenAddressingConfig::new().with_capacity(capacity))
    }

    /// Creates a table from a configuration
    ///
    /// # Errors
    ///
    /// Returns the error reported by [`OpenAddressingConfig::validate`].
    pub fn with_config(config: OpenAddressingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { slots: empty_slots(config.capacity()), len: 0, step_prime: config.step_prime() })
    }

    /// Primary hash: the first slot probed for `key`
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub fn home_slot(&self, key: Key) -> usize {
        key % self.slots.len()
    }

    /// Secondary hash: the probe step for `key`, always in `1..=C`
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn step_size(&self, key: Key) -> usize {
        self.step_prime - key % self.step_prime
    }

    /// Builds the probe sequence for `key` against the current array
    fn probe(&self, key: Key) -> Probe {
        Probe {
            index: self.home_slot(key),
            step: self.step_size(key),
            capacity: self.slots.len(),
            remaining: self.slots.len(),
        }
    }

    /// Inserts an item and returns the slot it was stored in.
    ///
    /// Grows the table first if it is full. The item goes into the first empty or tombstone
    /// slot along its probe sequence.
    pub fn insert(&mut self, item: Item<V>) -> usize {
        if self.is_full() {
            self.grow();
        }
        self.place(item)
    }

    /// Stores an item in the first vacant slot of its probe sequence.
    ///
    /// If the sequence runs out without finding one the table grows and the probe is retried.
    fn place(&mut self, item: Item<V>) -> usize {
        loop {
            for index in self.probe(item.key()) {
                if let Some(slot) = self.slots.get_mut(index).filter(|slot| slot.is_vacant()) {
                    *slot = Slot::Occupied(item);
                    self.len = self.len.saturating_add(1);
                    return index;
                }
            }
            log::warn!(
                "probe for key {} found no vacant slot among {} slots, growing",
                item.key(),
                self.slots.len()
            );
            self.grow();
        }
    }

    /// Doubles the capacity and re-inserts every live item in slot order.
    ///
    /// Tombstones are discarded. The number of live items is unchanged.
    pub fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = old_capacity.saturating_mul(2);
        log::debug!(
            "growing table from {old_capacity} to {new_capacity} slots with {} live items",
            self.len
        );

        let old_slots = mem::replace(&mut self.slots, empty_slots(new_capacity));
        self.len = 0;
        for slot in old_slots {
            if let Slot::Occupied(item) = slot {
                self.place(item);
            }
        }

        log::debug!("table grown to {} slots", self.slots.len());
    }

    /// Returns the slot index holding the first probed item with `key`
    #[must_use]
    pub fn position(&self, key: Key) -> Option<usize> {
        for index in self.probe(key) {
            match self.slots.get(index)? {
                Slot::Empty => return None,
                Slot::Occupied(item) if item.key() == key => return Some(index),
                Slot::Occupied(_) | Slot::Tombstone => {}
            }
        }
        None
    }

    /// Retrieves the item with `key`
    #[must_use]
    pub fn find(&self, key: Key) -> Option<&Item<V>> {
        match self.slots.get(self.position(key)?)? {
            Slot::Occupied(item) => Some(item),
            Slot::Empty | Slot::Tombstone => None,
        }
    }

    /// Retrieves a mutable reference to the item with `key`
    pub fn find_mut(&mut self, key: Key) -> Option<&mut Item<V>> {
        let index = self.position(key)?;
        match self.slots.get_mut(index)? {
            Slot::Occupied(item) => Some(item),
            Slot::Empty | Slot::Tombstone => None,
        }
    }

    /// Removes the item with `key`, leaving a tombstone in its slot
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::EmptyContainer`] if the table holds no live items and
    /// [`LookupError::NotFound`] if no item with `key` is reachable. The table is unchanged
    /// in both cases.
    pub fn delete(&mut self, key: Key) -> Result<Item<V>, LookupError> {
        if self.is_empty() {
            log::debug!("delete of key {key} from an empty table");
            return Err(LookupError::EmptyContainer);
        }

        let slot = self
            .position(key)
            .and_then(|index| self.slots.get_mut(index))
            .ok_or(LookupError::NotFound(key))?;
        match mem::replace(slot, Slot::Tombstone) {
            Slot::Occupied(item) => {
                self.len = self.len.saturating_sub(1);
                Ok(item)
            }
            previous => {
                *slot = previous;
                Err(LookupError::NotFound(key))
            }
        }
    }

    /// Returns true if every slot holds a live item
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Returns true if the table holds no live items
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of live items
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of slots
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the secondary hash constant
    #[must_use]
    pub const fn step_prime(&self) -> usize {
        self.step_prime
    }

    /// Returns the ratio of live items to slots
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }

    /// Removes every item and tombstone, keeping the current capacity
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.len = 0;
    }

    /// Returns an iterator over the live items in slot order
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { slots: self.slots.iter() }
    }

    /// Hands every slot, in index order, to the reporter
    pub fn display<R: SlotReporter + ?Sized>(&self, reporter: &mut R) {
        for (index, slot) in self.slots.iter().enumerate() {
            reporter.slot(index, slot.state());
        }
    }
}

/// Iterator over the live items of an [`OpenAddressingTable`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Remaining slots
    slots: std::slice::Iter<'a, Slot<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Item<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(|slot| match slot {
            Slot::Occupied(item) => Some(item),
            Slot::Empty | Slot::Tombstone => None,
        })
    }
}
