use crate::error::{OptionExt, Result, SelectionError};
use crate::population::{Gene, Parents, Population};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::selection::{normalized_fitness, require_rng, validate_inputs, wheel_cumulative_probs};

/// Stochastic universal sampling.
///
/// Uses the same fitness-proportional wheel as roulette-wheel selection, but spins
/// it once: `num_parents` pointers are placed `1 / num_parents_mating` apart,
/// starting from a single random offset in `[0, 1 / num_parents_mating)`. The fixed
/// spacing gives lower sampling variance than independent draws.
///
/// `num_parents_mating` is the size of the whole mating pool. Calls requesting
/// fewer parents only use the first pointers; calls requesting more are rejected.
///
/// # Examples
///
/// ```
/// use genselect::population::{GeneTypeMode, Population};
/// use genselect::rng::RandomNumberGenerator;
/// use genselect::selection::{SelectionStrategy, StochasticUniversalSelection};
/// use genselect::error::Result;
///
/// fn main() -> Result<()> {
///     let population = Population::new(
///         vec![vec![0], vec![1], vec![2], vec![3]],
///         GeneTypeMode::Homogeneous,
///     )?;
///     let fitness = vec![1.0, 1.0, 1.0, 1.0];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     // four evenly spaced pointers over four equal slots hit every solution once
///     let selection = StochasticUniversalSelection::new(4)?;
///     let parents = selection.select(&population, &fitness, 4, Some(&mut rng))?;
///
///     assert_eq!(parents.indices(), &[0, 1, 2, 3]);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct StochasticUniversalSelection {
    num_parents_mating: usize,
}

impl StochasticUniversalSelection {
    /// Creates a new strategy whose pointers are spaced for a mating pool of
    /// `num_parents_mating` parents.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_parents_mating` is 0.
    pub fn new(num_parents_mating: usize) -> Result<Self> {
        if num_parents_mating < 1 {
            return Err(SelectionError::Configuration(
                "Number of parents mating must be at least 1".to_string(),
            ));
        }

        Ok(Self { num_parents_mating })
    }

    pub fn num_parents_mating(&self) -> usize {
        self.num_parents_mating
    }

    /// Distance between two neighbouring pointers.
    pub fn pointers_distance(&self) -> f64 {
        1.0 / self.num_parents_mating as f64
    }
}

impl<G> SelectionStrategy<G> for StochasticUniversalSelection
where
    G: Gene,
{
    fn select(
        &self,
        population: &Population<G>,
        fitness: &[f64],
        num_parents: usize,
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Parents<G>> {
        validate_inputs(population.len(), fitness.len())?;
        if num_parents > self.num_parents_mating {
            return Err(SelectionError::Configuration(format!(
                "Requested {} parents but the pointers are spaced for {}",
                num_parents, self.num_parents_mating
            )));
        }

        let probs = normalized_fitness(fitness)?;
        let rng = require_rng(rng, "Stochastic universal selection")?;

        tracing::debug!(
            num_parents,
            num_parents_mating = self.num_parents_mating,
            population_size = population.len(),
            "stochastic universal selection"
        );

        let (wheel, mut parents) = wheel_cumulative_probs(&probs, population, num_parents)?;

        let pointers_distance = self.pointers_distance();
        let first_pointer = rng.gen_probability() * pointers_distance;

        for parent_num in 0..num_parents {
            let pointer = first_pointer + parent_num as f64 * pointers_distance;
            let idx = wheel.spin(pointer).ok_or_else_selection(|| {
                SelectionError::Configuration("Selection wheel is empty".to_string())
            })?;
            parents.push_from(population, idx);
        }

        Ok(parents)
    }
}
