//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the only source of randomness used by the
//! selectors. Every randomized selection call borrows one mutably, so each caller
//! owns its generator and a fixed seed makes a run reproducible.
//!
//! ## Example
//!
//! ```rust
//! use genselect::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let random_numbers = rng.fetch_uniform(0.0, 1.0, 5);
//!
//! for number in random_numbers {
//!     assert!((0.0..1.0).contains(&number));
//! }
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// selection operators need.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a specified number of random floating-point numbers within the given range.
    ///
    /// # Parameters
    ///
    /// - `from`: The lower bound of the range (inclusive).
    /// - `to`: The upper bound of the range (exclusive).
    /// - `num`: The number of random numbers to generate.
    ///
    /// # Panics
    ///
    /// Panics if `num > 0` and the range is empty (`from >= to`).
    pub fn fetch_uniform(&mut self, from: f64, to: f64, num: usize) -> Vec<f64> {
        (0..num).map(|_| self.rng.gen_range(from..to)).collect()
    }

    /// Draws a single value uniformly from `[0, 1)`.
    pub fn gen_probability(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Draws an index uniformly from `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Draws `num` indices uniformly from `[0, upper)`, with replacement.
    pub fn fetch_indices(&mut self, upper: usize, num: usize) -> Vec<usize> {
        (0..num).map(|_| self.gen_index(upper)).collect()
    }

    /// Returns `true` with probability 0.5.
    pub fn coin_flip(&mut self) -> bool {
        self.gen_probability() < 0.5
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_uniform_with_positive_range() {
        let mut rng = RandomNumberGenerator::new();
        let result = rng.fetch_uniform(0.0, 1.0, 5);

        assert_eq!(result.len(), 5);
        for &num in result.iter() {
            assert!((0.0..1.0).contains(&num));
        }
    }

    #[test]
    fn test_fetch_uniform_with_narrow_range() {
        let mut rng = RandomNumberGenerator::new();
        let result = rng.fetch_uniform(0.0, 0.25, 50);

        assert_eq!(result.len(), 50);
        for &num in result.iter() {
            assert!((0.0..0.25).contains(&num));
        }
    }

    #[test]
    fn test_fetch_uniform_with_empty_result() {
        let mut rng = RandomNumberGenerator::new();
        let result = rng.fetch_uniform(1.0, 2.0, 0);

        assert!(result.is_empty());
    }

    #[test]
    fn test_fetch_uniform_splits_into_rows() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let values = rng.fetch_uniform(-1.0, 1.0, 12);

        let rows: Vec<&[f64]> = values.chunks(3).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], &values[3..6]);
    }

    #[test]
    fn test_fetch_indices_stay_in_bounds() {
        let mut rng = RandomNumberGenerator::from_seed(7);
        let indices = rng.fetch_indices(4, 200);

        assert_eq!(indices.len(), 200);
        assert!(indices.iter().all(|&idx| idx < 4));
        // 200 draws over 4 slots hit every slot
        for slot in 0..4 {
            assert!(indices.contains(&slot));
        }
    }

    #[test]
    fn test_gen_probability_in_unit_interval() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        for _ in 0..1000 {
            let p = rng.gen_probability();
            assert!((0.0..1.0).contains(&p));
        }
    }

    #[test]
    fn test_clone_replays_sequence() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = rng1.clone();

        assert_eq!(rng1.fetch_uniform(0.0, 1.0, 5), rng2.fetch_uniform(0.0, 1.0, 5));
        assert_eq!(rng1.fetch_indices(10, 5), rng2.fetch_indices(10, 5));
        assert_eq!(rng1.coin_flip(), rng2.coin_flip());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut rng1 = RandomNumberGenerator::from_seed(11);
        let mut rng2 = RandomNumberGenerator::from_seed(11);

        assert_eq!(rng1.fetch_indices(100, 20), rng2.fetch_indices(100, 20));
    }
}
