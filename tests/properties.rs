// Property tests for both maps.
//
// Each map is driven by a random sequence of operations and compared against
// std::collections::HashMap as a model. After every step:
//  - len() matches the model and lookups agree on present and absent keys;
//  - the capacity is prime;
//  - the load bound holds (open addressing: 2 * len < capacity, chaining: len < capacity).
// Keys come from a small pool so overwrites, removals of present keys and tombstone reuse
// are frequent. Half of the runs use a hash that sends every key of the same length to
// the same slot, which keeps probe paths and chains long.
#![allow(clippy::ptr_arg, clippy::arithmetic_side_effects, clippy::unwrap_used)]

use std::collections::HashMap;

use primehash::{
    ChainedMap, HashFn, HashMapExtensions, OpenAddressingMap, is_prime, positional_hash,
};
use proptest::{collection::vec, prelude::*};

const POOL: usize = 24;

#[derive(Debug, Clone)]
enum Op {
    Put(usize, i32),
    Remove(usize),
    Get(usize),
    Resize(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => (0..POOL, any::<i32>()).prop_map(|(k, v)| Op::Put(k, v)),
        4 => (0..POOL).prop_map(Op::Remove),
        3 => (0..POOL).prop_map(Op::Get),
        1 => (0_usize..64).prop_map(Op::Resize),
        1 => Just(Op::Clear),
    ]
}

fn key(i: usize) -> String {
    format!("key{i}")
}

fn length_hash(key: &String) -> usize {
    key.len()
}

fn pick_hash(colliding: bool) -> HashFn<String> {
    if colliding { length_hash } else { positional_hash }
}

fn sorted<K: Ord, V: Ord>(mut pairs: Vec<(K, V)>) -> Vec<(K, V)> {
    pairs.sort();
    pairs
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn prop_open_addressing_matches_model(ops in vec(op_strategy(), 1..200), colliding in any::<bool>()) {
        let mut map = OpenAddressingMap::new(3, pick_hash(colliding));
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Put(k, v) => {
                    prop_assert_eq!(map.put(key(k), v), model.insert(key(k), v));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(map.remove(&key(k)), model.remove(&key(k)));
                    prop_assert!(!map.contains_key(&key(k)));
                }
                Op::Get(k) => {
                    prop_assert_eq!(map.get(&key(k)), model.get(&key(k)));
                }
                Op::Resize(capacity) => {
                    let before = map.capacity();
                    map.resize(capacity);
                    if capacity < map.len() {
                        prop_assert_eq!(map.capacity(), before);
                    } else {
                        prop_assert!(map.capacity() >= capacity);
                    }
                }
                Op::Clear => {
                    map.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(map.len(), model.len());
            prop_assert!(is_prime(map.capacity()));
            prop_assert!(map.len() * 2 < map.capacity(), "load {} too high", map.table_load());
            prop_assert_eq!(map.empty_buckets(), map.capacity() - map.len());
        }

        let expected = sorted(model.into_iter().collect());
        prop_assert_eq!(sorted(map.to_pairs()), expected);
    }

    #[test]
    fn prop_chained_matches_model(ops in vec(op_strategy(), 1..200), colliding in any::<bool>()) {
        let mut map = ChainedMap::new(3, pick_hash(colliding));
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Put(k, v) => {
                    prop_assert_eq!(map.put(key(k), v), model.insert(key(k), v));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(map.remove(&key(k)), model.remove(&key(k)));
                    prop_assert!(!map.contains_key(&key(k)));
                }
                Op::Get(k) => {
                    prop_assert_eq!(map.get(&key(k)), model.get(&key(k)));
                }
                Op::Resize(capacity) => {
                    let before = map.capacity();
                    map.resize(capacity);
                    if capacity == 0 {
                        prop_assert_eq!(map.capacity(), before);
                    }
                }
                Op::Clear => {
                    map.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(map.len(), model.len());
            prop_assert!(is_prime(map.capacity()));
            prop_assert!(map.len() < map.capacity(), "load {} too high", map.table_load());
            prop_assert!(map.empty_buckets() >= map.capacity() - map.len());
        }

        let expected = sorted(model.into_iter().collect());
        prop_assert_eq!(sorted(map.to_pairs()), expected);
    }

    #[test]
    fn prop_resize_preserves_contents(
        keys in vec("[a-z]{1,8}", 0..60),
        extra in 0_usize..200,
        removed in vec(any::<prop::sample::Index>(), 0..10),
    ) {
        let mut open = OpenAddressingMap::new(11, positional_hash);
        let mut chained = ChainedMap::new(11, positional_hash);
        for (value, k) in keys.iter().enumerate() {
            open.put(k.clone(), value);
            chained.put(k.clone(), value);
        }
        if !keys.is_empty() {
            for index in &removed {
                let k = index.get(&keys);
                open.remove(k);
                chained.remove(k);
            }
        }

        let open_before = sorted(open.to_pairs());
        let chained_before = sorted(chained.to_pairs());

        open.resize(open.len() + extra);
        chained.resize(chained.len() + extra);

        prop_assert_eq!(sorted(open.to_pairs()), open_before);
        prop_assert_eq!(sorted(chained.to_pairs()), chained_before);
        prop_assert!(open.table_load() < 0.5);
        prop_assert!(chained.table_load() < 1.0);
    }

    #[test]
    fn prop_iteration_visits_each_live_entry_once(keys in vec("[a-z]{1,6}", 0..80)) {
        let mut map = OpenAddressingMap::new(5, positional_hash);
        for k in &keys {
            map.put(k.clone(), ());
        }
        for k in keys.iter().step_by(3) {
            map.remove(k);
        }

        let visited: Vec<&String> = map.iter().map(|(k, _)| k).collect();
        prop_assert_eq!(visited.len(), map.len());
        let mut unique = visited.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), visited.len());
        prop_assert!(visited.iter().all(|k| map.contains_key(k)));
    }
}
