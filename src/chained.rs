use crate::{ChainReporter, ConfigError, Item, Key, LookupError, OrderedChain};

/// A hash table resolving collisions by separate chaining.
///
/// Each of the fixed number of buckets owns an [`OrderedChain`]. An item with key `k` always
/// lives in bucket `k % bucket_count`, so inserts never fail and the table never grows.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug)]
pub struct ChainedTable<V = ()> {
    /// One sorted chain per bucket
    buckets: Vec<OrderedChain<V>>,
    /// Number of items across all chains
    len: usize,
}

impl<V> Extend<Item<V>> for ChainedTable<V> {
    fn extend<T: IntoIterator<Item = Item<V>>>(&mut self, iter: T) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<V> ChainedTable<V> {
    /// Creates a table with `bucket_count` empty chains
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroBuckets`] if `bucket_count` is zero.
    pub fn with_buckets(bucket_count: usize) -> Result<Self, ConfigError> {
        if bucket_count == 0 {
            return Err(ConfigError::ZeroBuckets);
        }
        let buckets = std::iter::repeat_with(OrderedChain::new).take(bucket_count).collect();
        Ok(Self { buckets, len: 0 })
    }

    /// The bucket index for `key`
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub fn hash(&self, key: Key) -> usize {
        key % self.buckets.len()
    }

    /// Returns the chain `key` hashes to
    fn chain_for(&self, key: Key) -> Option<&OrderedChain<V>> {
        self.buckets.get(self.hash(key))
    }

    /// Returns the chain `key` hashes to, mutably
    fn chain_for_mut(&mut self, key: Key) -> Option<&mut OrderedChain<V>> {
        let index = self.hash(key);
        self.buckets.get_mut(index)
    }

    /// Inserts an item into its bucket's chain and returns the bucket index
    pub fn insert(&mut self, item: Item<V>) -> usize {
        let index = self.hash(item.key());
        if let Some(chain) = self.buckets.get_mut(index) {
            chain.insert(item);
            self.len = self.len.saturating_add(1);
        }
        index
    }

    /// Retrieves the first item with `key` in its bucket's chain
    #[must_use]
    pub fn find(&self, key: Key) -> Option<&Item<V>> {
        self.chain_for(key)?.find(key)
    }

    /// Retrieves a mutable reference to the first item with `key`
    pub fn find_mut(&mut self, key: Key) -> Option<&mut Item<V>> {
        self.chain_for_mut(key)?.find_mut(key)
    }

    /// Removes the first item with `key` from its bucket's chain
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::EmptyContainer`] if the target chain is empty and
    /// [`LookupError::NotFound`] if it holds no item with `key`.
    pub fn delete(&mut self, key: Key) -> Result<Item<V>, LookupError> {
        let item = self.chain_for_mut(key).ok_or(LookupError::NotFound(key))?.delete(key)?;
        self.len = self.len.saturating_sub(1);
        Ok(item)
    }

    /// Returns the number of items
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no bucket holds an item
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the chain stored in bucket `index`
    #[must_use]
    pub fn bucket(&self, index: usize) -> Option<&OrderedChain<V>> {
        self.buckets.get(index)
    }

    /// Returns an iterator over all items, bucket by bucket, each bucket in key order
    pub fn iter(&self) -> impl Iterator<Item = &Item<V>> {
        self.buckets.iter().flat_map(OrderedChain::iter)
    }

    /// Hands every bucket's keys, in bucket order, to the reporter
    pub fn display<R: ChainReporter + ?Sized>(&self, reporter: &mut R) {
        for (index, chain) in self.buckets.iter().enumerate() {
            reporter.bucket(index, &chain.keys());
        }
    }
}
