use crate::error::{OptionExt, Result, SelectionError};
use crate::population::{Gene, Parents, Population};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::selection::{ascending_order, require_rng, validate_inputs, wheel_cumulative_probs};

/// A selection strategy that selects solutions based on their rank in the population.
///
/// The worst solution gets rank 1 and the best gets rank N; only the relative order
/// of the fitness values matters, not their magnitude. A solution is drawn with
/// probability `rank / sum(ranks)`. This keeps a few dominant solutions from taking
/// over the mating pool and works with negative fitness values.
///
/// # Examples
///
/// ```
/// use genselect::population::{GeneTypeMode, Population};
/// use genselect::rng::RandomNumberGenerator;
/// use genselect::selection::{RankSelection, SelectionStrategy};
/// use genselect::error::Result;
///
/// fn main() -> Result<()> {
///     let population = Population::new(
///         vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0], vec![5.0]],
///         GeneTypeMode::Homogeneous,
///     )?;
///     let fitness = vec![-0.5, 0.8, 0.3, 0.9, -0.1];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     let selection = RankSelection::new();
///     let parents = selection.select(&population, &fitness, 3, Some(&mut rng))?;
///
///     assert_eq!(parents.len(), 3);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RankSelection;

impl RankSelection {
    pub fn new() -> Self {
        Self
    }

    /// Selection probability of each rank position: position `i` of the
    /// fitness-ascending order has rank `i + 1`.
    fn calculate_probabilities(&self, population_size: usize) -> Vec<f64> {
        let rank_sum = (population_size * (population_size + 1)) as f64 / 2.0;
        (1..=population_size)
            .map(|rank| rank as f64 / rank_sum)
            .collect()
    }
}

impl<G> SelectionStrategy<G> for RankSelection
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
        let rng = require_rng(rng, "Rank selection")?;

        tracing::debug!(
            num_parents,
            population_size = population.len(),
            "rank selection"
        );

        let fitness_sorted = ascending_order(fitness);
        let probs = self.calculate_probabilities(fitness.len());
        let (wheel, mut parents) = wheel_cumulative_probs(&probs, population, num_parents)?;

        for _ in 0..num_parents {
            // the wheel slot is a rank position, not a population index
            let rank_idx = wheel.spin(rng.gen_probability()).ok_or_else_selection(|| {
                SelectionError::Configuration("Rank wheel is empty".to_string())
            })?;
            parents.push_from(population, fitness_sorted[rank_idx]);
        }

        Ok(parents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::GeneTypeMode;

    fn population(size: usize) -> Population<f64> {
        Population::new(
            (0..size).map(|i| vec![i as f64]).collect(),
            GeneTypeMode::Homogeneous,
        )
        .unwrap()
    }

    fn counts(indices: &[usize], size: usize) -> Vec<usize> {
        let mut counts = vec![0; size];
        for &idx in indices {
            counts[idx] += 1;
        }
        counts
    }

    #[test]
    fn test_rank_selection() {
        let population = population(5);
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let parents = RankSelection::new()
            .select(&population, &fitness, 3, Some(&mut rng))
            .unwrap();

        assert_eq!(parents.len(), 3);
        for (solution, &idx) in parents.iter().zip(parents.indices()) {
            assert_eq!(solution, population.solution(idx));
        }
    }

    #[test]
    fn test_calculate_probabilities() {
        let probs = RankSelection::new().calculate_probabilities(4);

        assert_eq!(probs, vec![0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_magnitude_does_not_matter() {
        let population = population(3);
        let mild = vec![1.0, 2.0, 3.0];
        let extreme = vec![-1000.0, 0.0, 1e9];

        let mut rng = RandomNumberGenerator::from_seed(3);
        let a = RankSelection::new()
            .select(&population, &mild, 20, Some(&mut rng))
            .unwrap();
        let mut rng = RandomNumberGenerator::from_seed(3);
        let b = RankSelection::new()
            .select(&population, &extreme, 20, Some(&mut rng))
            .unwrap();

        assert_eq!(a.indices(), b.indices());
    }

    #[test]
    fn test_best_is_favoured() {
        let population = population(4);
        // best solution sits at index 0, worst at index 3
        let fitness = vec![40.0, 30.0, 20.0, 10.0];
        let mut rng = RandomNumberGenerator::from_seed(17);

        let parents = RankSelection::new()
            .select(&population, &fitness, 4000, Some(&mut rng))
            .unwrap();
        let counts = counts(parents.indices(), 4);

        // expected shares are 0.4, 0.3, 0.2, 0.1
        assert!(counts[0] > counts[1]);
        assert!(counts[1] > counts[2]);
        assert!(counts[2] > counts[3]);
        assert!(counts[3] > 0);
    }

    #[test]
    fn test_single_solution() {
        let population = population(1);
        let mut rng = RandomNumberGenerator::from_seed(0);

        let parents = RankSelection::new()
            .select(&population, &[7.0], 3, Some(&mut rng))
            .unwrap();

        assert_eq!(parents.indices(), &[0, 0, 0]);
    }

    #[test]
    fn test_requires_rng() {
        let population = population(2);
        let result = RankSelection::new().select(&population, &[1.0, 2.0], 1, None);

        assert!(matches!(result, Err(SelectionError::Configuration(_))));
    }
}
