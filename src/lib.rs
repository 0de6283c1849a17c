//! # Prime Hash
//!
//! Hash maps over prime-sized backing arrays with an injected hash function.
//!
//! This crate provides two hash map implementations:
//!
//! - `OpenAddressingMap`: stores entries directly in the array, resolving collisions with
//!   quadratic probing and deleting with tombstones. Grows before its load factor reaches 0.5.
//! - `ChainedMap`: keeps a chain of entries per bucket. Grows before its load factor
//!   reaches 1.0.
//!
//! Both always hold a prime number of slots, so the quadratic probe sequence
//! `(hash + i²) mod capacity` visits distinct slots for the first half of a probe round.
//! Neither map hashes keys on its own: the hash function is passed at construction.
//!
//! The hash function takes `&K`, so lookups take `&K` as well rather than a borrowed form
//! such as `&str` for `String` keys. A map keyed by `&str` avoids the allocation.
//!
//! ## Basic Usage
//!
//! ```rust
//! use primehash::{OpenAddressingMap, additive_hash};
//!
//! // Create a new hash map with at least 11 slots
//! let mut map = OpenAddressingMap::new(11, additive_hash);
//!
//! // Insert values
//! map.put("apple".to_string(), 1);
//! map.put("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get(&"apple".to_string()), Some(&1));
//!
//! // Update values
//! map.put("apple".to_string(), 10);
//! assert_eq!(map.get(&"apple".to_string()), Some(&10));
//!
//! // Remove values
//! map.remove(&"apple".to_string());
//! assert_eq!(map.get(&"apple".to_string()), None);
//! ```
//!
//! ## Chaining and Frequency Counting
//!
//! ```rust
//! use primehash::{ChainedMap, find_mode, positional_hash};
//!
//! let mut map = ChainedMap::new(3, positional_hash);
//! for word in ["one", "two", "three", "four"] {
//!     map.put(word, word.len());
//! }
//! // Four entries never fit in three buckets, so the map has grown
//! assert!(map.capacity() > 3);
//! assert!(map.table_load() < 1.0);
//!
//! let (modes, frequency) = find_mode(&["a", "b", "b", "c", "c"]);
//! assert_eq!(modes.len(), 2);
//! assert_eq!(frequency, 2);
//! ```

/// Module implementing the separate chaining hash map
mod chained;
/// Reference hash functions to inject into the maps
mod hashing;
/// Frequency counting built on the chained map
mod mode;
/// Module implementing the open addressing hash map
mod open_addressing;
/// Prime capacity sizing
mod prime;
/// Quadratic probe sequence
mod probe;
/// Slot and chain storage units
mod slot;
/// Utility functions and traits for the hash maps
mod utils;

pub use chained::{ChainedMap, Iter as ChainedIter};
pub use hashing::{HashFn, additive_hash, positional_hash};
pub use mode::{find_mode, find_mode_by};
pub use open_addressing::{Iter, OpenAddressingMap};
pub use prime::{is_prime, next_prime};
pub use utils::HashMapExtensions;
