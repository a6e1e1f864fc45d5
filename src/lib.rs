//! # Collide
//!
//! Integer-keyed hash tables built on two classical collision-resolution strategies.
//!
//! This crate provides two table implementations:
//!
//! - `OpenAddressingTable`: all items live in one flat array. Collisions are resolved by double
//!   hashing, deleted slots become tombstones, and a full table doubles its capacity and
//!   re-inserts every live item.
//! - `ChainedTable`: a fixed number of buckets, each an `OrderedChain` kept in ascending key
//!   order, so a bucket absorbs any number of collisions.
//!
//! Neither table is thread-safe, and neither detects duplicate keys.
//!
//! ## Open Addressing
//!
//! ```rust
//! use collide::{Item, LookupError, OpenAddressingTable};
//!
//! // 13 slots, step prime 5
//! let mut table = OpenAddressingTable::new();
//!
//! assert_eq!(table.insert(Item::from(47)), 8);
//! // 60 also hashes to slot 8 and steps by 5 - 60 % 5 = 5
//! assert_eq!(table.insert(Item::from(60)), 0);
//!
//! assert_eq!(table.delete(47), Ok(Item::from(47)));
//! assert_eq!(table.find(47), None);
//! // The tombstone left at slot 8 keeps 60 reachable
//! assert_eq!(table.find(60), Some(&Item::from(60)));
//! assert_eq!(table.delete(47), Err(LookupError::NotFound(47)));
//! ```
//!
//! ## Separate Chaining
//!
//! ```rust
//! use collide::{ChainedTable, Item};
//!
//! let mut table = ChainedTable::with_buckets(7)?;
//! for key in [15, 11, 21, 14] {
//!     table.insert(Item::from(key));
//! }
//!
//! let bucket = table.bucket(0).map(|chain| chain.keys());
//! assert_eq!(bucket, Some(vec![14, 21]));
//! # Ok::<(), collide::ConfigError>(())
//! ```
//!
//! ## Reporting
//!
//! Rendering is left to the caller. `display` hands the table's contents to a reporter:
//!
//! ```rust
//! use collide::{Item, OpenAddressingTable, SlotReporter, SlotState};
//!
//! struct Line(String);
//!
//! impl SlotReporter for Line {
//!     fn slot(&mut self, _index: usize, state: SlotState) {
//!         let cell = match state {
//!             SlotState::Occupied(key) => key.to_string(),
//!             SlotState::Empty | SlotState::Tombstone => "**".to_string(),
//!         };
//!         self.0.push_str(&cell);
//!         self.0.push(' ');
//!     }
//! }
//!
//! let mut table = OpenAddressingTable::new();
//! table.insert(Item::from(1));
//! let mut line = Line(String::new());
//! table.display(&mut line);
//! assert!(line.0.starts_with("** 1 **"));
//! ```

/// Module implementing the separate-chaining table
mod chained;
/// Construction parameters for the open-addressing table
mod config;
/// Error types
mod error;
/// The keyed data item
mod item;
/// Module implementing the double-hashing open-addressing table
mod open_addressing;
/// Module implementing the sorted singly-linked chain
mod ordered_chain;
/// Reporter collaborators for `display`
mod report;
/// Utility traits for the tables
mod utils;

pub use chained::ChainedTable;
pub use config::{DEFAULT_CAPACITY, DEFAULT_STEP_PRIME, OpenAddressingConfig};
pub use error::{ConfigError, LookupError};
pub use item::{Item, Key};
pub use open_addressing::{Iter as SlotIter, OpenAddressingTable};
pub use ordered_chain::{Iter as ChainIter, OrderedChain};
pub use report::{ChainReporter, SlotReporter, SlotState};
pub use utils::TableExtensions;
