use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    mem,
};

use log::{debug, trace};

use crate::{
    hashing::{HashFn, additive_hash},
    prime::next_prime,
    probe::QuadraticProbe,
    slot::{Slot, empty_slots},
};

/// Capacity used by `Default`
const DEFAULT_CAPACITY: usize = 11;

/// Outcome of walking a key's probe sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Located {
    /// The key lives at this index
    Found(usize),
    /// The key is absent; this is the first reusable slot on its path
    Vacant(usize),
    /// The key is absent and the path holds no reusable slot
    Full,
}

/// A hash map resolving collisions with quadratic probing over a prime-sized array.
///
/// Removal leaves a tombstone so that keys placed further down a probe path stay
/// reachable. Tombstones are only reclaimed by a resize, which rebuilds every slot.
/// The table grows to the next prime above twice its capacity whenever a new key would
/// bring the load factor to one half, so at least half of the slots are never live.
///
/// Keys are hashed by the function given at construction, never by `std::hash::Hash`.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct OpenAddressingMap<K, V, H = HashFn<K>> {
    /// The backing array, its length is always prime
    slots: Vec<Slot<K, V>>,
    /// Number of live entries
    size: usize,
    /// Injected hash function
    hash_fn: H,
}

impl<K, V> Default for OpenAddressingMap<K, V>
where
    K: AsRef<str>,
{
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, additive_hash)
    }
}

impl<K, V, H> Extend<(K, V)> for OpenAddressingMap<K, V, H>
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

impl<K, V, H> OpenAddressingMap<K, V, H> {
    /// Creates an empty map with `next_prime(capacity)` slots, hashing keys with `hash_fn`
    #[must_use]
    pub fn new(capacity: usize, hash_fn: H) -> Self {
        Self { slots: empty_slots(next_prime(capacity)), size: 0, hash_fn }
    }

    /// Returns the number of live entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no live entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots in the backing array
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the current load factor, `len / capacity`
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.slots.len() as f64
    }

    /// Returns the number of slots without a live entry, tombstones included
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.slots.len().saturating_sub(self.size)
    }

    /// Removes every entry, keeping the current capacity
    pub fn clear(&mut self) {
        self.slots = empty_slots(self.slots.len());
        self.size = 0;
    }

    /// Returns an iterator over the live entries in slot order.
    ///
    /// Each call starts a fresh cursor at slot 0.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: &self.slots, index: 0 }
    }

    /// Returns every live pair in slot order
    #[must_use]
    pub fn pairs(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}

impl<K, V, H> OpenAddressingMap<K, V, H>
where
    K: Eq,
    H: Fn(&K) -> usize,
{
    /// Starts the probe sequence of `key` over the current array
    fn probe(&self, key: &K) -> QuadraticProbe {
        QuadraticProbe::new((self.hash_fn)(key), self.slots.len())
    }

    /// Walks the probe sequence of `key`.
    ///
    /// Tombstones never end the walk, only an empty slot or the key itself does. The first
    /// tombstone passed is remembered so an insertion can reuse it.
    fn locate(&self, key: &K) -> Located {
        let mut first_tombstone = None;
        for index in self.probe(key) {
            match self.slots.get(index) {
                Some(Slot::Occupied(existing, _)) if existing == key => {
                    return Located::Found(index);
                }
                Some(Slot::Occupied(..)) => {}
                Some(Slot::Tombstone) => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(index);
                    }
                }
                Some(Slot::Empty) | None => {
                    return Located::Vacant(first_tombstone.unwrap_or(index));
                }
            }
        }
        first_tombstone.map_or(Located::Full, Located::Vacant)
    }

    /// Returns true if one more live entry would bring the load factor to one half
    fn would_overload(&self) -> bool {
        self.size.saturating_add(1).saturating_mul(2) >= self.slots.len()
    }

    /// Inserts a key-value pair, returning the previous value if the key was present.
    ///
    /// A new key grows the table first when it would bring the load factor to one half.
    /// The entry lands in the first tombstone on the key's probe path, or in the empty
    /// slot that ends it.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let mut located = self.locate(&key);
        if !matches!(located, Located::Found(_)) && self.would_overload() {
            self.resize(self.slots.len().saturating_mul(2));
            located = self.locate(&key);
        }

        match located {
            Located::Found(index) => match self.slots.get_mut(index) {
                Some(Slot::Occupied(_, existing)) => Some(mem::replace(existing, value)),
                _ => None,
            },
            Located::Vacant(index) => {
                if let Some(slot) = self.slots.get_mut(index) {
                    *slot = Slot::Occupied(key, value);
                    self.size += 1;
                }
                None
            }
            Located::Full => {
                // Only reachable if the probe path visits no reusable slot, grow and retry
                self.resize(self.slots.len().saturating_mul(2));
                self.put(key, value)
            }
        }
    }

    /// Retrieve a value for a given key
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        match self.locate(key) {
            Located::Found(index) => self.slots.get(index).and_then(Slot::entry).map(|(_, v)| v),
            Located::Vacant(_) | Located::Full => None,
        }
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.locate(key) {
            Located::Found(index) => match self.slots.get_mut(index) {
                Some(Slot::Occupied(_, value)) => Some(value),
                _ => None,
            },
            Located::Vacant(_) | Located::Full => None,
        }
    }

    /// Returns true if the map holds a live entry for `key`
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Replaces the entry for `key` with a tombstone and returns its value.
    /// Absent keys leave the map untouched.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let Located::Found(index) = self.locate(key) else {
            return None;
        };
        let value = self.slots.get_mut(index)?.bury()?;
        self.size -= 1;
        Some(value)
    }

    /// Rebuilds the table with at least `new_capacity` slots.
    ///
    /// Does nothing when `new_capacity` is below the number of live entries. Otherwise the
    /// capacity becomes `next_prime(new_capacity)`, doubled and re-primed until the load
    /// factor is below one half, and every live entry is reinserted in slot order.
    /// Tombstones do not survive.
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity < self.size {
            trace!(
                "open addressing resize to {new_capacity} skipped, {} live entries",
                self.size
            );
            return;
        }

        let mut capacity = next_prime(new_capacity);
        while self.size.saturating_mul(2) >= capacity {
            capacity = next_prime(capacity.saturating_mul(2));
        }
        debug!(
            "open addressing table resized from {} to {capacity} slots ({} live entries)",
            self.slots.len(),
            self.size
        );

        let old = mem::replace(&mut self.slots, empty_slots(capacity));
        for slot in old {
            if let Slot::Occupied(key, value) = slot {
                self.place_fresh(key, value);
            }
        }
    }

    /// Puts a key known to be absent into the first empty slot on its probe path
    fn place_fresh(&mut self, key: K, value: V) {
        for index in self.probe(&key) {
            if let Some(slot) = self.slots.get_mut(index) {
                if matches!(slot, Slot::Empty) {
                    *slot = Slot::Occupied(key, value);
                    return;
                }
            }
        }
    }

    /// Number of slots a lookup of `key` examines before it resolves
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub fn probe_count(&self, key: &K) -> usize {
        let mut probes = 0;
        for index in self.probe(key) {
            probes += 1;
            match self.slots.get(index) {
                Some(Slot::Occupied(existing, _)) if existing == key => break,
                Some(Slot::Empty) | None => break,
                Some(Slot::Occupied(..) | Slot::Tombstone) => {}
            }
        }
        probes
    }
}

impl<K, V, H> Display for OpenAddressingMap<K, V, H>
where
    K: Display,
    V: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "{index}: None")?,
                Slot::Tombstone => writeln!(f, "{index}: Tombstone")?,
                Slot::Occupied(key, value) => writeln!(f, "{index}: K: {key} V: {value}")?,
            }
        }
        Ok(())
    }
}

impl<'a, K, V, H> IntoIterator for &'a OpenAddressingMap<K, V, H> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over the live entries of an `OpenAddressingMap`, in slot order.
///
/// The cursor borrows the map, so the map cannot be mutated while it is alive. Once it
/// runs off the end of the array it stays exhausted; call `iter` again to restart.
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// The backing array being walked
    slots: &'a [Slot<K, V>],
    /// Next slot to inspect
    index: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.get(self.index) {
            self.index = self.index.saturating_add(1);
            if let Some(entry) = slot.entry() {
                return Some(entry);
            }
        }
        None
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
