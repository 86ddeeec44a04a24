//! # Cumulative Wheel
//!
//! Rank and roulette-wheel selection both spin a wheel whose slots are
//! proportional to the selection probability of each solution. Slots are laid out
//! from the smallest probability to the largest, so low-probability solutions
//! occupy the low end of `[0, total)`. Equal probabilities keep their index order.
//!
//! ## Example
//!
//! ```rust
//! use genselect::selection::CumulativeWheel;
//!
//! let wheel = CumulativeWheel::from_probabilities(&[0.5, 0.2, 0.3]).unwrap();
//!
//! assert_eq!(wheel.order(), &[1, 2, 0]);
//! assert_eq!(wheel.locate(0.1), Some(1));
//! assert_eq!(wheel.locate(0.45), Some(2));
//! assert_eq!(wheel.locate(0.9), Some(0));
//! ```

use crate::error::{Result, SelectionError};
use crate::population::{Gene, Parents, Population};

/// Half-open ranges `[start, end)` of a probability vector, laid out in ascending
/// probability order.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeWheel {
    starts: Vec<f64>,
    ends: Vec<f64>,
    /// Slots from the smallest probability to the largest.
    order: Vec<usize>,
    /// Whether the ends grow along `order`, i.e. no probability is negative.
    monotone: bool,
}

impl CumulativeWheel {
    /// Lays out the wheel for `probs`. The probabilities are not renormalized.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::InvalidNumericValue` if a probability is NaN or
    /// infinite.
    pub fn from_probabilities(probs: &[f64]) -> Result<Self> {
        if let Some(idx) = probs.iter().position(|p| !p.is_finite()) {
            return Err(SelectionError::InvalidNumericValue(format!(
                "Selection probability of solution {} is {}",
                idx, probs[idx]
            )));
        }

        let mut order: Vec<usize> = (0..probs.len()).collect();
        order.sort_by(|&a, &b| probs[a].total_cmp(&probs[b]));

        let mut starts = vec![0.0; probs.len()];
        let mut ends = vec![0.0; probs.len()];
        let mut curr = 0.0;
        for &idx in order.iter() {
            starts[idx] = curr;
            curr += probs[idx];
            ends[idx] = curr;
        }

        Ok(Self {
            starts,
            ends,
            order,
            monotone: probs.iter().all(|&p| p >= 0.0),
        })
    }

    /// Start of each slot, indexed like the probability vector.
    pub fn starts(&self) -> &[f64] {
        &self.starts
    }

    /// End of each slot, indexed like the probability vector.
    pub fn ends(&self) -> &[f64] {
        &self.ends
    }

    /// Slot indices from the smallest probability to the largest.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The cumulative probability at the top of the wheel.
    pub fn total(&self) -> f64 {
        self.order.last().map_or(0.0, |&idx| self.ends[idx])
    }

    /// Returns the slot whose range contains `value`, if any.
    pub fn locate(&self, value: f64) -> Option<usize> {
        if self.monotone {
            let k = self.order.partition_point(|&idx| self.ends[idx] <= value);
            return self
                .order
                .get(k)
                .copied()
                .filter(|&idx| self.starts[idx] <= value);
        }

        (0..self.len()).find(|&idx| self.starts[idx] <= value && value < self.ends[idx])
    }

    /// Like [`locate`](Self::locate), but a value past the top of the wheel lands on
    /// the highest-probability slot. Only an empty wheel yields `None`.
    pub fn spin(&self, value: f64) -> Option<usize> {
        self.locate(value).or_else(|| self.order.last().copied())
    }
}

/// Builds the wheel for `probs` and allocates the parent buffer the wheel-based
/// selectors fill.
pub fn wheel_cumulative_probs<G: Gene>(
    probs: &[f64],
    population: &Population<G>,
    num_parents: usize,
) -> Result<(CumulativeWheel, Parents<G>)> {
    let wheel = CumulativeWheel::from_probabilities(probs)?;
    Ok((wheel, Parents::allocate(population, num_parents)))
}
