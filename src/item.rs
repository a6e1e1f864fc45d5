//! The data item stored by both tables

/// Integer key used for hashing, ordering and equality.
///
/// Keys are non-negative; both tables hash them with plain remainder arithmetic.
pub type Key = usize;

/// A keyed data item.
///
/// In the minimal model the key is the whole payload and `V` is `()`. A payload can be
/// attached to tell apart entries that share a key; it never takes part in hashing or ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item<V = ()> {
    /// The key the item is filed under
    key: Key,
    /// Data carried alongside the key
    value: V,
}

impl<V> Item<V> {
    /// Creates an item with the given key and payload
    #[must_use]
    pub fn new(key: Key, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the item's key
    #[must_use]
    pub const fn key(&self) -> Key {
        self.key
    }

    /// Returns a reference to the payload
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the payload
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the item and returns its payload
    #[must_use]
    pub fn into_value(self) -> V {
        self.value
    }
}

impl From<Key> for Item {
    fn from(key: Key) -> Self {
        Self::new(key, ())
    }
}
