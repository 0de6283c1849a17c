//! Quadratic probe sequence over a prime-sized table

/// Yields `(start + i²) mod capacity` for `i = 0, 1, .., capacity - 1`.
///
/// Successive offsets differ by `2i - 1`, so each step is one addition and one reduction
/// and `i²` is never materialized. Over a prime capacity the first `(capacity + 1) / 2`
/// indices are distinct, and the sequence always ends after `capacity` steps.
#[derive(Debug, Clone)]
pub(crate) struct QuadraticProbe {
    /// Index yielded by the next call to `next`
    index: usize,
    /// Probe number `i` of the next index
    step: usize,
    /// Table size the indices are reduced by
    capacity: usize,
}

impl QuadraticProbe {
    /// Starts a probe sequence at `hash mod capacity`.
    #[allow(clippy::arithmetic_side_effects)]
    pub(crate) fn new(hash: usize, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { index: hash % capacity, step: 0, capacity }
    }
}

impl Iterator for QuadraticProbe {
    type Item = usize;

    #[allow(clippy::arithmetic_side_effects)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.capacity {
            return None;
        }
        let current = self.index;
        self.step += 1;
        // i² - (i - 1)² = 2i - 1, reduced so the sum below stays under 2 * capacity
        let delta = (2 * self.step - 1) % self.capacity;
        self.index = (self.index + delta) % self.capacity;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.capacity.saturating_sub(self.step);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for QuadraticProbe {}
