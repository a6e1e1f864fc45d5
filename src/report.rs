//! Reporter collaborators fed by the tables' `display` operations.
//!
//! The tables only hand over what they hold, slot by slot or bucket by bucket, in index order.
//! How that gets rendered is the reporter's business.

use crate::Key;

/// What a single open-addressing slot holds, as seen by a reporter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Never written since the last growth or clear
    Empty,
    /// Held an item that has since been deleted
    Tombstone,
    /// Holds a live item with this key
    Occupied(Key),
}

/// Receives the slots of an [`OpenAddressingTable`](crate::OpenAddressingTable)
pub trait SlotReporter {
    /// Called once per slot, in ascending slot order
    fn slot(&mut self, index: usize, state: SlotState);
}

/// Receives the buckets of a [`ChainedTable`](crate::ChainedTable)
pub trait ChainReporter {
    /// Called once per bucket, in ascending bucket order, with the chain's keys in chain order
    fn bucket(&mut self, index: usize, keys: &[Key]);
}

impl SlotReporter for Vec<(usize, SlotState)> {
    fn slot(&mut self, index: usize, state: SlotState) {
        self.push((index, state));
    }
}

impl ChainReporter for Vec<(usize, Vec<Key>)> {
    fn bucket(&mut self, index: usize, keys: &[Key]) {
        self.push((index, keys.to_vec()));
    }
}
