//! Utility traits shared by both map implementations

use crate::{ChainedMap, OpenAddressingMap};

/// Extension trait for map implementations that provides owned snapshots of their contents.
///
/// Every method enumerates in the map's storage order, not insertion order.
pub trait HashMapExtensions<K, V> {
    /// Returns the keys of the hash map as a Vec
    fn keys(&self) -> Vec<K>;

    /// Returns the values of the hash map as a Vec
    fn values(&self) -> Vec<V>;

    /// Returns true if the hash map contains the given key
    fn contains_key(&self, key: &K) -> bool;

    /// Returns cloned key-value pairs as a Vec
    fn to_pairs(&self) -> Vec<(K, V)>;
}

impl<K, V, H> HashMapExtensions<K, V> for OpenAddressingMap<K, V, H>
where
    K: Eq + Clone,
    V: Clone,
    H: Fn(&K) -> usize,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    fn to_pairs(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K, V, H> HashMapExtensions<K, V> for ChainedMap<K, V, H>
where
    K: Eq + Clone,
    V: Clone,
    H: Fn(&K) -> usize,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    fn to_pairs(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::additive_hash;

    #[test]
    fn test_keys_and_values() {
        let mut map = OpenAddressingMap::new(11, additive_hash);
        map.put("a".to_string(), 1);
        map.put("b".to_string(), 2);
        map.put("c".to_string(), 3);

        let mut keys = map.keys();
        keys.sort(); // Sort for predictable comparison

        let mut values = map.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_contains_key() {
        let mut open = OpenAddressingMap::new(11, additive_hash);
        let mut chained = ChainedMap::new(11, additive_hash);
        open.put("a".to_string(), 1);
        chained.put("a".to_string(), 1);

        assert!(HashMapExtensions::contains_key(&open, &"a".to_string()));
        assert!(!HashMapExtensions::contains_key(&open, &"b".to_string()));
        assert!(HashMapExtensions::contains_key(&chained, &"a".to_string()));
        assert!(!HashMapExtensions::contains_key(&chained, &"b".to_string()));

        open.remove(&"a".to_string());
        assert!(!HashMapExtensions::contains_key(&open, &"a".to_string()));
    }

    #[test]
    fn test_chained_snapshot_follows_bucket_order() {
        let mut map = ChainedMap::new(5, |key: &u32| usize::try_from(*key).unwrap_or(0));
        map.put(4, "four");
        map.put(1, "one");
        map.put(6, "six");

        assert_eq!(map.keys(), vec![1, 6, 4]);
        assert_eq!(map.to_pairs(), vec![(1, "one"), (6, "six"), (4, "four")]);
    }
}
