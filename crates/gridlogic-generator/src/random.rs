//! Seeded pseudo-random stream shared by every generator.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64;

use crate::PuzzleSeed;

/// A deterministic random stream.
///
/// The stream is a PCG-XSL-RR 128/64 generator seeded from a [`PuzzleSeed`].
/// Bounded draws and shuffling are implemented here on top of raw `u64`
/// output, so a given seed always yields the same sequence of draws.
///
/// # Examples
///
/// ```
/// use gridlogic_generator::{DeterministicRandom, PuzzleSeed};
///
/// let mut a = DeterministicRandom::new(PuzzleSeed::new(20_240_101));
/// let mut b = DeterministicRandom::new(PuzzleSeed::new(20_240_101));
///
/// let draws: Vec<_> = (0..8).map(|_| a.below(10)).collect();
/// assert!(draws.iter().all(|&n| n < 10));
/// assert_eq!(draws, (0..8).map(|_| b.below(10)).collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone)]
pub struct DeterministicRandom {
    rng: Pcg64,
}

impl DeterministicRandom {
    /// Creates a stream from `seed`.
    #[must_use]
    pub fn new(seed: PuzzleSeed) -> Self {
        #[expect(clippy::cast_sign_loss)]
        let state = seed.get() as u64;
        Self {
            rng: Pcg64::seed_from_u64(state),
        }
    }

    /// Returns a uniform integer in `0..bound`.
    ///
    /// A `bound` of 0 or 1 returns 0 without advancing the stream.
    #[expect(clippy::cast_possible_truncation)]
    pub fn below(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        let bound = bound as u64;
        // Lemire's nearly-divisionless rejection.
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let product = u128::from(self.rng.next_u64()) * u128::from(bound);
            if product as u64 >= threshold {
                return (product >> 64) as usize;
            }
        }
    }

    /// Returns a uniform integer in `lo..hi`, or `lo` if the range is empty.
    pub fn range(&mut self, lo: usize, hi: usize) -> usize {
        lo + self.below(hi.saturating_sub(lo))
    }

    /// Shuffles `items` in place with a descending Fisher-Yates pass.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(seed: i64) -> DeterministicRandom {
        DeterministicRandom::new(PuzzleSeed::new(seed))
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = stream(42);
        let mut b = stream(42);
        for bound in [2, 3, 9, 81, 1000] {
            assert_eq!(a.below(bound), b.below(bound));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a: Vec<_> = {
            let mut rng = stream(1);
            (0..16).map(|_| rng.below(1 << 20)).collect()
        };
        let b: Vec<_> = {
            let mut rng = stream(2);
            (0..16).map(|_| rng.below(1 << 20)).collect()
        };
        assert_ne!(a, b);
    }

    #[test]
    fn test_trivial_bounds_do_not_consume_state() {
        let mut a = stream(7);
        let mut b = stream(7);
        assert_eq!(a.below(0), 0);
        assert_eq!(a.below(1), 0);
        assert_eq!(a.range(5, 5), 5);
        assert_eq!(a.range(5, 3), 5);
        assert_eq!(a.below(100), b.below(100));
    }

    #[test]
    fn test_range_stays_in_bounds() {
        let mut rng = stream(-3);
        for _ in 0..1000 {
            let n = rng.range(4, 9);
            assert!((4..9).contains(&n));
        }
    }

    #[test]
    fn test_every_value_is_reachable() {
        let mut rng = stream(99);
        let mut seen = [false; 6];
        for _ in 0..600 {
            seen[rng.below(6)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = stream(20_240_101);
        let mut items: Vec<u8> = (1..=9).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=9).collect::<Vec<_>>());

        let mut again: Vec<u8> = (1..=9).collect();
        stream(20_240_101).shuffle(&mut again);
        assert_eq!(items, again);
    }

    #[test]
    fn test_shuffle_short_slices() {
        let mut rng = stream(0);
        let mut empty: [u8; 0] = [];
        rng.shuffle(&mut empty);
        let mut one = [5];
        rng.shuffle(&mut one);
        assert_eq!(one, [5]);
    }
}
