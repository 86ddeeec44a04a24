use crate::error::{OptionExt, Result, SelectionError};
use crate::population::{Gene, Parents, Population};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::selection::{normalized_fitness, require_rng, validate_inputs, wheel_cumulative_probs};

/// A selection strategy that selects solutions with probability proportional to
/// their fitness.
///
/// Each parent is drawn independently by spinning the wheel with a uniform value in
/// `[0, 1)`. Fitness values are expected to be non-negative; a fitness sum of zero
/// fails with [`SelectionError::ZeroFitnessSum`] before anything is drawn.
///
/// # Examples
///
/// ```
/// use genselect::population::{GeneTypeMode, Population};
/// use genselect::rng::RandomNumberGenerator;
/// use genselect::selection::{RouletteWheelSelection, SelectionStrategy};
/// use genselect::error::{Result, SelectionError};
///
/// fn main() -> Result<()> {
///     let population = Population::new(
///         vec![vec![1.0], vec![2.0], vec![3.0]],
///         GeneTypeMode::Homogeneous,
///     )?;
///     let mut rng = RandomNumberGenerator::from_seed(42);
///     let selection = RouletteWheelSelection::new();
///
///     let parents = selection.select(&population, &[0.5, 0.8, 0.3], 2, Some(&mut rng))?;
///     assert_eq!(parents.len(), 2);
///
///     let degenerate = selection.select(&population, &[0.0, 0.0, 0.0], 2, Some(&mut rng));
///     assert_eq!(degenerate, Err(SelectionError::ZeroFitnessSum));
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }
}

impl<G> SelectionStrategy<G> for RouletteWheelSelection
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

        // no draw happens before the distribution is known to exist
        let probs = normalized_fitness(fitness)?;
        let rng = require_rng(rng, "Roulette wheel selection")?;

        tracing::debug!(
            num_parents,
            population_size = population.len(),
            "roulette wheel selection"
        );

        let (wheel, mut parents) = wheel_cumulative_probs(&probs, population, num_parents)?;

        for _ in 0..num_parents {
            let idx = wheel.spin(rng.gen_probability()).ok_or_else_selection(|| {
                SelectionError::Configuration("Roulette wheel is empty".to_string())
            })?;
            parents.push_from(population, idx);
        }

        Ok(parents)
    }
}
