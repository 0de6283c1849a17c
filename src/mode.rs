//! Frequency counting on top of `ChainedMap`

use crate::{chained::ChainedMap, hashing::additive_hash};

/// Capacity of the counting table before it grows
const INITIAL_CAPACITY: usize = 11;

/// Returns the most frequent items and their frequency.
///
/// Ties are all returned, in the order the counting table enumerates them. An empty input
/// yields no modes and a frequency of 0.
///
/// ```rust
/// use primehash::find_mode;
///
/// let (modes, frequency) = find_mode(&["apple", "apple", "grape", "melon", "peach"]);
/// assert_eq!(modes, vec!["apple"]);
/// assert_eq!(frequency, 2);
/// ```
#[must_use]
pub fn find_mode<T>(items: &[T]) -> (Vec<T>, usize)
where
    T: AsRef<str> + Eq + Clone,
{
    find_mode_by(items, additive_hash)
}

/// Like [`find_mode`], counting with a caller-supplied hash function.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn find_mode_by<T, H>(items: &[T], hash_fn: H) -> (Vec<T>, usize)
where
    T: Eq + Clone,
    H: Fn(&T) -> usize,
{
    let mut counts = ChainedMap::new(INITIAL_CAPACITY, hash_fn);
    for item in items {
        match counts.get_mut(item) {
            Some(count) => *count += 1,
            None => {
                counts.put(item.clone(), 1_usize);
            }
        }
    }

    let frequency = counts.iter().map(|(_, &count)| count).max().unwrap_or(0);
    let modes = counts
        .iter()
        .filter(|&(_, &count)| count == frequency)
        .map(|(item, _)| item.clone())
        .collect();
    (modes, frequency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mode() {
        let (modes, frequency) = find_mode(&["apple", "apple", "grape", "melon", "peach"]);
        assert_eq!(modes, vec!["apple"]);
        assert_eq!(frequency, 2);
    }

    #[test]
    fn test_ties_are_all_returned() {
        let input = ["Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu"];
        let (mut modes, frequency) = find_mode(&input);
        modes.sort_unstable();
        assert_eq!(modes, vec!["Mint", "Ubuntu"]);
        assert_eq!(frequency, 3);
    }

    #[test]
    fn test_all_distinct() {
        let input: Vec<String> = (0..20).map(|i| format!("item{i}")).collect();
        let (modes, frequency) = find_mode(&input);
        assert_eq!(modes.len(), 20);
        assert_eq!(frequency, 1);
    }

    #[test]
    fn test_empty_input() {
        let (modes, frequency) = find_mode::<&str>(&[]);
        assert!(modes.is_empty());
        assert_eq!(frequency, 0);
    }

    #[test]
    fn test_custom_hash() {
        let input = [4_u32, 7, 4, 9, 7, 4];
        let (modes, frequency) = find_mode_by(&input, |n: &u32| usize::try_from(*n).unwrap_or(0));
        assert_eq!(modes, vec![4]);
        assert_eq!(frequency, 3);
    }
}
