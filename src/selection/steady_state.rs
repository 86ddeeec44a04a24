use crate::error::Result;
use crate::population::{Gene, Parents, Population};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::selection::{ascending_order, validate_inputs, validate_quota};

/// A selection strategy that keeps the best solutions of the generation.
///
/// Solutions are ranked by descending fitness and the top `num_parents` become
/// parents. The ranking reverses a stable ascending sort, so among equal fitness
/// values the later index comes first; NaN ranks last. No randomness is involved.
///
/// # Examples
///
/// ```
/// use genselect::population::{GeneTypeMode, Population};
/// use genselect::selection::{SelectionStrategy, SteadyStateSelection};
/// use genselect::error::Result;
///
/// fn main() -> Result<()> {
///     let population = Population::new(
///         vec![vec![1], vec![2], vec![3], vec![4], vec![5]],
///         GeneTypeMode::Homogeneous,
///     )?;
///     let fitness = vec![3.0, 1.0, 4.0, 1.0, 5.0];
///
///     let selection = SteadyStateSelection::new();
///     let parents = selection.select(&population, &fitness, 2, None)?;
///
///     assert_eq!(parents.indices(), &[4, 2]);
///     assert_eq!(parents.get(0), Some(&[5][..]));
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct SteadyStateSelection;

impl SteadyStateSelection {
    pub fn new() -> Self {
        Self
    }

    /// Population indices ranked from best to worst.
    fn ranking(&self, fitness: &[f64]) -> Vec<usize> {
        let mut fitness_sorted = ascending_order(fitness);
        fitness_sorted.reverse();
        fitness_sorted
    }
}

impl<G> SelectionStrategy<G> for SteadyStateSelection
where
    G: Gene,
{
    fn select(
        &self,
        population: &Population<G>,
        fitness: &[f64],
        num_parents: usize,
        _rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Parents<G>> {
        validate_inputs(population.len(), fitness.len())?;
        validate_quota(num_parents, population.len())?;

        tracing::debug!(
            num_parents,
            population_size = population.len(),
            "steady-state selection"
        );

        let mut parents = Parents::allocate(population, num_parents);
        for &idx in self.ranking(fitness).iter().take(num_parents) {
            parents.push_from(population, idx);
        }

        Ok(parents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SelectionError;
    use crate::population::GeneTypeMode;

    fn population(size: usize) -> Population<f64> {
        Population::new(
            (0..size).map(|i| vec![i as f64, i as f64 * 10.0]).collect(),
            GeneTypeMode::Homogeneous,
        )
        .unwrap()
    }

    #[test]
    fn test_steady_state_selection() {
        let population = population(5);
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];

        let selection = SteadyStateSelection::new();
        let parents = selection.select(&population, &fitness, 3, None).unwrap();

        assert_eq!(parents.len(), 3);
        assert_eq!(parents.indices(), &[3, 1, 0]);
        assert_eq!(parents.get(0), Some(&[3.0, 30.0][..]));
        assert_eq!(parents.get(2), Some(&[0.0, 0.0][..]));
    }

    #[test]
    fn test_known_example() {
        let population = population(5);
        let fitness = vec![3.0, 1.0, 4.0, 1.0, 5.0];

        let parents = SteadyStateSelection::new()
            .select(&population, &fitness, 2, None)
            .unwrap();

        assert_eq!(parents.indices(), &[4, 2]);
    }

    #[test]
    fn test_ties_prefer_later_index() {
        let population = population(4);
        let fitness = vec![1.0, 2.0, 2.0, 0.0];

        let parents = SteadyStateSelection::new()
            .select(&population, &fitness, 3, None)
            .unwrap();

        assert_eq!(parents.indices(), &[2, 1, 0]);
    }

    #[test]
    fn test_nan_ranks_last() {
        let population = population(3);
        let fitness = vec![0.5, f64::NAN, 0.3];

        let parents = SteadyStateSelection::new()
            .select(&population, &fitness, 3, None)
            .unwrap();

        assert_eq!(parents.indices(), &[0, 2, 1]);
    }

    #[test]
    fn test_is_idempotent() {
        let population = population(6);
        let fitness = vec![0.2, 0.9, 0.9, 0.1, 0.4, 0.7];
        let selection = SteadyStateSelection::new();

        let first = selection.select(&population, &fitness, 4, None).unwrap();
        let second = selection.select(&population, &fitness, 4, None).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_parents() {
        let population = population(3);
        let parents = SteadyStateSelection::new()
            .select(&population, &[1.0, 2.0, 3.0], 0, None)
            .unwrap();

        assert!(parents.is_empty());
    }

    #[test]
    fn test_too_many_parents() {
        let population = population(2);
        let result = SteadyStateSelection::new().select(&population, &[1.0, 2.0], 3, None);

        assert_eq!(
            result,
            Err(SelectionError::TooManyParents {
                requested: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_empty_population() {
        let population: Population<f64> =
            Population::new(Vec::new(), GeneTypeMode::Homogeneous).unwrap();
        let result = SteadyStateSelection::new().select(&population, &[], 1, None);

        assert_eq!(result, Err(SelectionError::EmptyPopulation));
    }

    #[test]
    fn test_mismatched_lengths() {
        let population = population(2);
        let result = SteadyStateSelection::new().select(&population, &[0.5], 1, None);

        assert!(matches!(
            result,
            Err(SelectionError::FitnessLengthMismatch { .. })
        ));
    }
}
