use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    mem,
};

use log::{debug, trace};

use crate::{
    hashing::{HashFn, additive_hash},
    prime::next_prime,
    slot::{Chain, Node},
};

/// Capacity used by `Default`
const DEFAULT_CAPACITY: usize = 11;

/// A hash map resolving collisions by chaining entries within each bucket.
///
/// The bucket count is always prime and grows to the next prime above twice its value
/// whenever a new key would bring the load factor to one.
#[derive(Debug, Clone)]
pub struct ChainedMap<K, V, H = HashFn<K>> {
    /// The buckets storing the key-value chains
    buckets: Vec<Chain<K, V>>,
    /// Current number of entries
    size: usize,
    /// Injected hash function
    hash_fn: H,
}

impl<K, V> Default for ChainedMap<K, V>
where
    K: AsRef<str>,
{
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, additive_hash)
    }
}

impl<K, V, H> Extend<(K, V)> for ChainedMap<K, V, H>
where
    K: Eq,
    H: Fn(&K) -> usize,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

/// Builds `count` empty chains
fn empty_chains<K, V>(count: usize) -> Vec<Chain<K, V>> {
    std::iter::repeat_with(Chain::default).take(count).collect()
}

impl<K, V, H> ChainedMap<K, V, H> {
    /// Creates an empty map with `next_prime(capacity)` buckets, hashing keys with `hash_fn`
    #[must_use]
    pub fn new(capacity: usize, hash_fn: H) -> Self {
        Self { buckets: empty_chains(next_prime(capacity)), size: 0, hash_fn }
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current load factor, `len / capacity`
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Returns the number of buckets holding no entries
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// Returns the length of the longest chain
    #[must_use]
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Chain::len).max().unwrap_or(0)
    }

    /// Removes every entry, keeping the bucket count
    pub fn clear(&mut self) {
        self.buckets = empty_chains(self.buckets.len());
        self.size = 0;
    }

    /// Returns an iterator over the entries in bucket order, then chain order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { buckets: self.buckets.iter(), chain: None }
    }

    /// Returns every pair in bucket order, then chain order
    #[must_use]
    pub fn pairs(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}

impl<K, V, H> ChainedMap<K, V, H>
where
    K: Eq,
    H: Fn(&K) -> usize,
{
    /// Gets the bucket index for a key
    #[allow(clippy::arithmetic_side_effects)]
    fn bucket_index(&self, key: &K) -> usize {
        (self.hash_fn)(key) % self.buckets.len().max(1)
    }

    /// Returns the chain `key` hashes to
    fn chain(&self, key: &K) -> Option<&Chain<K, V>> {
        self.buckets.get(self.bucket_index(key))
    }

    /// Returns the chain `key` hashes to, for modification
    fn chain_mut(&mut self, key: &K) -> Option<&mut Chain<K, V>> {
        let index = self.bucket_index(key);
        self.buckets.get_mut(index)
    }

    /// Inserts a key-value pair, returning the previous value if the key was present.
    ///
    /// A new key grows the table first when it would bring the load factor to one, then
    /// is appended to the tail of its chain.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(node) = self.chain_mut(&key).and_then(|chain| chain.find_mut(&key)) {
            return Some(mem::replace(&mut node.value, value));
        }

        if self.size.saturating_add(1) >= self.buckets.len() {
            self.resize(self.buckets.len().saturating_mul(2));
        }
        if let Some(chain) = self.chain_mut(&key) {
            chain.push(key, value);
            self.size += 1;
        }
        None
    }

    /// Retrieve a value for a given key
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.chain(key)?.find(key).map(|node| &node.value)
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.chain_mut(key)?.find_mut(key).map(|node| &mut node.value)
    }

    /// Returns true if the map holds an entry for `key`
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.chain(key).is_some_and(|chain| chain.find(key).is_some())
    }

    /// Unlinks the entry for `key` and returns its value
    #[allow(clippy::arithmetic_side_effects)]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.chain_mut(key)?.unlink(key)?;
        self.size -= 1;
        Some(value)
    }

    /// Rebuilds the table with at least `new_capacity` buckets.
    ///
    /// Does nothing when `new_capacity` is zero. Otherwise the bucket count becomes
    /// `next_prime(new_capacity)`, doubled and re-primed until the load factor is below
    /// one, and every entry is appended to its new chain in bucket order.
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity < 1 {
            trace!("chained resize to {new_capacity} skipped");
            return;
        }

        let mut capacity = next_prime(new_capacity);
        while self.size >= capacity {
            capacity = next_prime(capacity.saturating_mul(2));
        }
        debug!(
            "chained table resized from {} to {capacity} buckets ({} entries)",
            self.buckets.len(),
            self.size
        );

        let old = mem::replace(&mut self.buckets, empty_chains(capacity));
        for (key, value) in old.into_iter().flat_map(Chain::into_pairs) {
            if let Some(chain) = self.chain_mut(&key) {
                chain.push(key, value);
            }
        }
    }

    /// Number of chain nodes a lookup of `key` compares before it resolves
    #[must_use]
    pub fn probe_count(&self, key: &K) -> usize {
        self.chain(key).map_or(0, |chain| chain.scan_len(key))
    }
}

impl<K, V, H> Display for ChainedMap<K, V, H>
where
    K: Display,
    V: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.buckets.iter().enumerate() {
            write!(f, "{index}:")?;
            for node in chain.iter() {
                write!(f, " -> ({}: {})", node.key, node.value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a, K, V, H> IntoIterator for &'a ChainedMap<K, V, H> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a `ChainedMap`, bucket by bucket
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Buckets not yet started
    buckets: std::slice::Iter<'a, Chain<K, V>>,
    /// Remaining nodes of the bucket in progress
    chain: Option<std::slice::Iter<'a, Node<K, V>>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.chain.as_mut().and_then(Iterator::next) {
                return Some((&node.key, &node.value));
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
