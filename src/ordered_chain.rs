use std::fmt;

use crate::{Item, Key, LookupError};

/// Owning link to the next node
type Link<V> = Option<Box<Node<V>>>;

/// A single chain element
#[derive(Debug)]
struct Node<V> {
    /// The stored item
    item: Item<V>,
    /// The rest of the chain
    next: Link<V>,
}

/// A singly-linked list kept in ascending key order.
///
/// For any two adjacent nodes `a -> b`, `a.key <= b.key`. Equal keys are allowed; a new item is
/// linked in front of the items already holding its key.
pub struct OrderedChain<V = ()> {
    /// First node, holding the smallest key
    head: Link<V>,
    /// Number of nodes
    len: usize,
}

impl<V> Default for OrderedChain<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> OrderedChain<V> {
    /// Creates an empty chain
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns true if the chain has no nodes
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of nodes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the item with the smallest key
    #[must_use]
    pub fn first(&self) -> Option<&Item<V>> {
        self.head.as_deref().map(|node| &node.item)
    }

    /// Returns the link in front of the first node whose key is not less than `key`
    fn lower_bound(&mut self, key: Key) -> &mut Link<V> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.item.key() < key) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        cursor
    }

    /// Splices `item` in before the first node whose key is greater than or equal to its own
    pub fn insert(&mut self, item: Item<V>) {
        let cursor = self.lower_bound(item.key());
        let next = cursor.take();
        *cursor = Some(Box::new(Node { item, next }));
        self.len = self.len.saturating_add(1);
    }

    /// Retrieves the first item with `key`, stopping as soon as a larger key is reached
    #[must_use]
    pub fn find(&self, key: Key) -> Option<&Item<V>> {
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            if node.item.key() > key {
                break;
            }
            if node.item.key() == key {
                return Some(&node.item);
            }
            current = node.next.as_deref();
        }
        None
    }

    /// Retrieves a mutable reference to the first item with `key`
    pub fn find_mut(&mut self, key: Key) -> Option<&mut Item<V>> {
        self.lower_bound(key)
            .as_deref_mut()
            .map(|node| &mut node.item)
            .filter(|item| item.key() == key)
    }

    /// Unlinks the first node with `key` and returns its item
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::EmptyContainer`] if the chain has no nodes and
    /// [`LookupError::NotFound`] if no node holds `key`.
    pub fn delete(&mut self, key: Key) -> Result<Item<V>, LookupError> {
        if self.is_empty() {
            log::debug!("delete of key {key} from an empty chain");
            return Err(LookupError::EmptyContainer);
        }

        let cursor = self.lower_bound(key);
        match cursor.take() {
            Some(node) if node.item.key() == key => {
                let Node { item, next } = *node;
                *cursor = next;
                self.len = self.len.saturating_sub(1);
                Ok(item)
            }
            other => {
                *cursor = other;
                Err(LookupError::NotFound(key))
            }
        }
    }

    /// Returns an iterator over the items in ascending key order
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { node: self.head.as_deref() }
    }

    /// Returns the keys in chain order
    #[must_use]
    pub fn keys(&self) -> Vec<Key> {
        self.iter().map(Item::key).collect()
    }
}

impl<V> Drop for OrderedChain<V> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for OrderedChain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<V> Extend<Item<V>> for OrderedChain<V> {
    fn extend<T: IntoIterator<Item = Item<V>>>(&mut self, iter: T) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<V> FromIterator<Item<V>> for OrderedChain<V> {
    fn from_iter<T: IntoIterator<Item = Item<V>>>(iter: T) -> Self {
        let mut chain = Self::new();
        chain.extend(iter);
        chain
    }
}

/// Iterator over the items of an [`OrderedChain`]
#[derive(Debug)]
pub struct Iter<'a, V> {
    /// Node to yield next
    node: Option<&'a Node<V>>,
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self { node: self.node }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Item<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.node.map(|node| {
            self.node = node.next.as_deref();
            &node.item
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chain_of(keys: &[Key]) -> OrderedChain {
        keys.iter().copied().map(Item::from).collect()
    }

    #[test]
    fn test_insert_keeps_ascending_order() {
        let chain = chain_of(&[21, 14, 35, 0, 28]);
        assert_eq!(chain.keys(), vec![0, 14, 21, 28, 35]);
        assert_eq!(chain.len(), 5);
        assert_eq!(chain.first(), Some(&Item::from(0)));
    }

    #[test]
    fn test_equal_keys_go_in_front() {
        let mut chain = OrderedChain::new();
        chain.insert(Item::new(3, "old"));
        chain.insert(Item::new(1, "low"));
        chain.insert(Item::new(3, "new"));

        let values: Vec<&str> = chain.iter().map(|item| *item.value()).collect();
        assert_eq!(values, vec!["low", "new", "old"]);
        assert_eq!(chain.find(3).map(Item::value), Some(&"new"));
    }

    #[test]
    fn test_find_stops_at_larger_key() {
        let chain = chain_of(&[2, 4, 6]);
        assert_eq!(chain.find(4), Some(&Item::from(4)));
        assert_eq!(chain.find(5), None);
        assert_eq!(chain.find(7), None);
        assert_eq!(chain.find(1), None);
    }

    #[test]
    fn test_delete_head_middle_and_tail() {
        let mut chain = chain_of(&[1, 2, 3, 4]);
        assert_eq!(chain.delete(1), Ok(Item::from(1)));
        assert_eq!(chain.delete(3), Ok(Item::from(3)));
        assert_eq!(chain.delete(4), Ok(Item::from(4)));
        assert_eq!(chain.keys(), vec![2]);
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_delete_missing_and_empty() {
        let mut chain = chain_of(&[10, 20]);
        assert_eq!(chain.delete(15), Err(LookupError::NotFound(15)));
        assert_eq!(chain.delete(30), Err(LookupError::NotFound(30)));
        assert_eq!(chain.keys(), vec![10, 20]);

        let mut empty: OrderedChain = OrderedChain::new();
        assert_eq!(empty.delete(1), Err(LookupError::EmptyContainer));
    }

    #[test]
    fn test_find_mut() {
        let mut chain = OrderedChain::new();
        chain.insert(Item::new(5, 1));
        chain.insert(Item::new(9, 2));
        if let Some(item) = chain.find_mut(9) {
            *item.value_mut() = 20;
        }
        assert_eq!(chain.find(9).map(Item::value), Some(&20));
        assert!(chain.find_mut(7).is_none());
    }

    #[test]
    fn test_long_chain_drops() {
        let chain: OrderedChain = (0..200_000usize).rev().map(Item::from).collect();
        assert_eq!(chain.len(), 200_000);
        drop(chain);
    }

    #[test]
    fn test_debug_lists_items() {
        let chain = chain_of(&[2, 1]);
        assert_eq!(
            format!("{chain:?}"),
            "[Item { key: 1, value: () }, Item { key: 2, value: () }]"
        );
    }

    proptest! {
        #[test]
        fn prop_chain_stays_sorted(keys in prop::collection::vec(0usize..50, 0..100)) {
            let chain = chain_of(&keys);
            let chained = chain.keys();
            prop_assert!(chained.windows(2).all(|pair| pair.first() <= pair.get(1)));

            let mut expected = keys.clone();
            expected.sort_unstable();
            prop_assert_eq!(chained, expected);
        }

        #[test]
        fn prop_delete_removes_one_copy(keys in prop::collection::vec(0usize..20, 1..60), target in 0usize..20) {
            let mut chain = chain_of(&keys);
            let copies = keys.iter().filter(|&&key| key == target).count();

            let result = chain.delete(target);
            prop_assert_eq!(result.is_ok(), copies > 0);
            prop_assert_eq!(chain.iter().filter(|item| item.key() == target).count(), copies.saturating_sub(1));
            prop_assert_eq!(chain.find(target).is_some(), copies > 1);
        }
    }
}
