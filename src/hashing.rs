//! Reference string hash functions
//!
//! The maps never hash keys themselves; these are ready-made functions to inject into
//! them. Both are deliberately simple and collide often, which makes them useful for
//! exercising the collision paths.

/// The hash function type stored by default in both maps
pub type HashFn<K> = fn(&K) -> usize;

/// Sums the Unicode scalar values of the key.
///
/// Anagrams collide: `additive_hash("ab") == additive_hash("ba")`.
#[must_use]
pub fn additive_hash<S: AsRef<str> + ?Sized>(key: &S) -> usize {
    key.as_ref().chars().fold(0_usize, |hash, ch| hash.wrapping_add(scalar(ch)))
}

/// Sums each scalar value weighted by its one-based position in the key.
#[must_use]
pub fn positional_hash<S: AsRef<str> + ?Sized>(key: &S) -> usize {
    key.as_ref().chars().enumerate().fold(0_usize, |hash, (position, ch)| {
        let weight = position.wrapping_add(1);
        hash.wrapping_add(weight.wrapping_mul(scalar(ch)))
    })
}

/// Widens a `char` to its scalar value.
fn scalar(ch: char) -> usize {
    usize::try_from(u32::from(ch)).unwrap_or(usize::MAX)
}
