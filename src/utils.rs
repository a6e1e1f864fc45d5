//! Utility traits shared by both table implementations

use crate::{ChainedTable, Item, Key, OpenAddressingTable};

/// Extension trait for the tables that provides additional utility methods
pub trait TableExtensions<V> {
    /// Returns the keys of every live item, in table order
    fn keys(&self) -> Vec<Key>;

    /// Returns the payloads of every live item, in table order
    fn values(&self) -> Vec<V>
    where
        V: Clone;

    /// Returns true if the table contains an item with the given key
    fn contains_key(&self, key: Key) -> bool;
}

impl<V> TableExtensions<V> for OpenAddressingTable<V> {
    fn keys(&self) -> Vec<Key> {
        self.iter().map(Item::key).collect()
    }

    fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|item| item.value().clone()).collect()
    }

    fn contains_key(&self, key: Key) -> bool {
        self.find(key).is_some()
    }
}

impl<V> TableExtensions<V> for ChainedTable<V> {
    fn keys(&self) -> Vec<Key> {
        self.iter().map(Item::key).collect()
    }

    fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|item| item.value().clone()).collect()
    }

    fn contains_key(&self, key: Key) -> bool {
        self.find(key).is_some()
    }
}

/// Builds a default open-addressing table (13 slots, step prime 5), growing as needed
impl<V> FromIterator<Item<V>> for OpenAddressingTable<V> {
    fn from_iter<I: IntoIterator<Item = Item<V>>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;

    #[test]
    fn test_from_iter() {
        let table: OpenAddressingTable<char> =
            [(1, 'a'), (2, 'b'), (3, 'c')].into_iter().map(|(k, v)| Item::new(k, v)).collect();

        assert_eq!(table.find(1).map(Item::value), Some(&'a'));
        assert_eq!(table.find(2).map(Item::value), Some(&'b'));
        assert_eq!(table.find(3).map(Item::value), Some(&'c'));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_keys_and_values() -> Result<(), ConfigError> {
        let items = [(14, 'x'), (3, 'y'), (7, 'z')];

        let open: OpenAddressingTable<char> =
            items.into_iter().map(|(k, v)| Item::new(k, v)).collect();
        let mut keys = open.keys();
        keys.sort_unstable();
        let mut values = open.values();
        values.sort_unstable();
        assert_eq!(keys, vec![3, 7, 14]);
        assert_eq!(values, vec!['x', 'y', 'z']);

        let mut chained = ChainedTable::with_buckets(5)?;
        chained.extend(items.into_iter().map(|(k, v)| Item::new(k, v)));
        assert_eq!(chained.keys(), vec![7, 3, 14]);
        assert_eq!(chained.values(), vec!['z', 'y', 'x']);
        Ok(())
    }

    #[test]
    fn test_contains_key() -> Result<(), ConfigError> {
        let open: OpenAddressingTable = [Item::from(9)].into_iter().collect();
        assert!(open.contains_key(9));
        assert!(!open.contains_key(22));

        let mut chained = ChainedTable::with_buckets(4)?;
        chained.insert(Item::from(9));
        assert!(chained.contains_key(9));
        assert!(!chained.contains_key(13));
        Ok(())
    }
}
