use crate::error::Result;
use crate::population::{Gene, Parents, Population};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::selection::{require_rng, validate_inputs};

/// A selection strategy that ignores fitness and draws parents uniformly at
/// random, with replacement.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RandomSelection;

impl RandomSelection {
    pub fn new() -> Self {
        Self
    }
}

impl<G> SelectionStrategy<G> for RandomSelection
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
        let rng = require_rng(rng, "Random selection")?;

        tracing::debug!(
            num_parents,
            population_size = population.len(),
            "random selection"
        );

        let mut parents = Parents::allocate(population, num_parents);
        for idx in rng.fetch_indices(fitness.len(), num_parents) {
            parents.push_from(population, idx);
        }

        Ok(parents)
    }
}
