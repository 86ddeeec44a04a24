use crate::error::{Result, SelectionError};
use crate::pareto::{FastNonDominatedSort, FitnessMatrix, ParetoRanking};
use crate::population::{Gene, Parents, Population};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::MultiObjectiveSelection;
use crate::selection::{validate_fronts, validate_inputs, validate_quota};

/// Deterministic NSGA-II survival selection.
///
/// Whole Pareto fronts are taken best-first while they fit into the remaining
/// quota. The first front that does not fit is truncated to the members with the
/// largest crowding distance, so the least crowded solutions of the boundary front
/// survive. No solution is selected twice and no random draw is made.
///
/// # Examples
///
/// ```
/// use genselect::pareto::FitnessMatrix;
/// use genselect::population::{GeneTypeMode, Population};
/// use genselect::selection::{MultiObjectiveSelection, Nsga2Selection};
/// use genselect::error::Result;
///
/// fn main() -> Result<()> {
///     let population = Population::new(
///         vec![vec![0], vec![1], vec![2], vec![3]],
///         GeneTypeMode::Homogeneous,
///     )?;
///     let fitness = FitnessMatrix::new(vec![
///         vec![1.0, 1.0],
///         vec![4.0, 2.0],
///         vec![2.0, 4.0],
///         vec![3.0, 3.0],
///     ])?;
///
///     let parents = Nsga2Selection::new().select(&population, &fitness, 2, None)?;
///
///     // front 0 is {1, 2, 3}; 1 and 2 are its boundaries
///     assert_eq!(parents.indices(), &[1, 2]);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct Nsga2Selection<R = FastNonDominatedSort> {
    ranking: R,
}

impl Nsga2Selection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: ParetoRanking> Nsga2Selection<R> {
    /// Creates a new strategy with a custom ranking collaborator.
    pub fn with_ranking(ranking: R) -> Self {
        Self { ranking }
    }

    pub fn ranking(&self) -> &R {
        &self.ranking
    }
}

impl<G, R> MultiObjectiveSelection<G> for Nsga2Selection<R>
where
    G: Gene,
    R: ParetoRanking,
{
    fn select(
        &self,
        population: &Population<G>,
        fitness: &FitnessMatrix,
        num_parents: usize,
        _rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Parents<G>> {
        validate_inputs(population.len(), fitness.num_solutions())?;
        validate_quota(num_parents, population.len())?;

        let fronts = self.ranking.non_dominated_sorting(fitness)?;
        validate_fronts(&fronts, population.len())?;

        tracing::debug!(
            num_parents,
            population_size = population.len(),
            num_fronts = fronts.num_fronts(),
            "NSGA-II selection"
        );

        let mut parents = Parents::allocate(population, num_parents);

        for (front_idx, front) in fronts.fronts().iter().enumerate() {
            let remaining = num_parents - parents.len();
            if remaining == 0 {
                break;
            }

            if front.len() <= remaining {
                for &idx in front {
                    parents.push_from(population, idx);
                }
            } else {
                let crowding = self.ranking.crowding_distance(front, fitness)?;
                tracing::trace!(front_idx, remaining, "truncating front by crowding distance");
                for &idx in crowding.population_order.iter().take(remaining) {
                    parents.push_from(population, idx);
                }
            }
        }

        if parents.len() < num_parents {
            return Err(SelectionError::Ranking(format!(
                "Fronts yielded {} of {} requested parents",
                parents.len(),
                num_parents
            )));
        }

        Ok(parents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pareto::{crowding_distance, CrowdingDistance, ParetoFronts};
    use crate::population::GeneTypeMode;

    #[derive(Debug)]
    struct FixedRanking {
        fronts: Vec<Vec<usize>>,
    }

    impl ParetoRanking for FixedRanking {
        fn non_dominated_sorting(&self, fitness: &FitnessMatrix) -> Result<ParetoFronts> {
            ParetoFronts::new(self.fronts.clone(), fitness.num_solutions())
        }

        fn crowding_distance(
            &self,
            front: &[usize],
            fitness: &FitnessMatrix,
        ) -> Result<CrowdingDistance> {
            crowding_distance(front, fitness)
        }
    }

    /// Ranking that returns the same fronts whatever the fitness.
    #[derive(Debug)]
    struct StaleRanking(ParetoFronts);

    impl ParetoRanking for StaleRanking {
        fn non_dominated_sorting(&self, _fitness: &FitnessMatrix) -> Result<ParetoFronts> {
            Ok(self.0.clone())
        }

        fn crowding_distance(
            &self,
            front: &[usize],
            fitness: &FitnessMatrix,
        ) -> Result<CrowdingDistance> {
            crowding_distance(front, fitness)
        }
    }

    /// Ranking whose crowding order is empty.
    #[derive(Debug)]
    struct LossyCrowding;

    impl ParetoRanking for LossyCrowding {
        fn non_dominated_sorting(&self, fitness: &FitnessMatrix) -> Result<ParetoFronts> {
            FastNonDominatedSort::default().non_dominated_sorting(fitness)
        }

        fn crowding_distance(
            &self,
            front: &[usize],
            fitness: &FitnessMatrix,
        ) -> Result<CrowdingDistance> {
            let mut distances = crowding_distance(front, fitness)?;
            distances.population_order.clear();
            Ok(distances)
        }
    }

    fn population(size: usize) -> Population<f64> {
        Population::new(
            (0..size).map(|i| vec![i as f64, i as f64 * 10.0]).collect(),
            GeneTypeMode::Homogeneous,
        )
        .unwrap()
    }

    /// Fronts of sizes 2, 3 and 1: {0, 1}, {2, 3, 4}, {5}.
    fn layered_fitness() -> FitnessMatrix {
        FitnessMatrix::new(vec![
            vec![5.0, 10.0],
            vec![10.0, 5.0],
            vec![1.0, 9.0],
            vec![4.0, 4.0],
            vec![9.0, 1.0],
            vec![0.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_partial_front_keeps_least_crowded() {
        let population = population(6);

        let parents = Nsga2Selection::new()
            .select(&population, &layered_fitness(), 4, None)
            .unwrap();

        // all of front 0, the two boundaries of front 1, nothing of front 2
        assert_eq!(parents.indices(), &[0, 1, 2, 4]);
        for (solution, &idx) in parents.iter().zip(parents.indices()) {
            assert_eq!(solution, population.solution(idx));
        }
    }

    #[test]
    fn test_whole_fronts_only() {
        let population = population(6);

        let parents = Nsga2Selection::new()
            .select(&population, &layered_fitness(), 5, None)
            .unwrap();

        assert_eq!(parents.indices(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_partial_first_front() {
        let population = population(6);

        let parents = Nsga2Selection::new()
            .select(&population, &layered_fitness(), 1, None)
            .unwrap();

        // both members of front 0 are boundaries; the stable order keeps the first
        assert_eq!(parents.indices(), &[0]);
    }

    #[test]
    fn test_whole_population() {
        let population = population(6);

        let parents = Nsga2Selection::new()
            .select(&population, &layered_fitness(), 6, None)
            .unwrap();

        let mut indices = parents.indices().to_vec();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_custom_ranking_front_order() {
        let population = population(6);
        let fitness =
            FitnessMatrix::from_single_objective(&[1.0, 0.0, 2.0, 0.0, 0.0, 3.0]).unwrap();
        let ranking = FixedRanking {
            fronts: vec![vec![4, 1], vec![0, 5, 2], vec![3]],
        };

        let parents = Nsga2Selection::with_ranking(ranking)
            .select(&population, &fitness, 4, None)
            .unwrap();

        // front 0 in its own order, then the boundaries 0 and 5 of front 1
        assert_eq!(parents.indices(), &[4, 1, 0, 5]);
    }

    #[test]
    fn test_fronts_must_cover_the_population() {
        let population = population(6);
        let fitness = FitnessMatrix::from_single_objective(&[1.0; 6]).unwrap();

        // fronts over 3 solutions for a population of 6
        let short = ParetoFronts::new(vec![vec![0, 1, 2]], 3).unwrap();
        let result = Nsga2Selection::with_ranking(StaleRanking(short))
            .select(&population, &fitness, 5, None);
        assert!(matches!(result, Err(SelectionError::Ranking(_))));

        let oversized = ParetoFronts::new(vec![(0..8).collect()], 8).unwrap();
        let result = Nsga2Selection::with_ranking(StaleRanking(oversized))
            .select(&population, &fitness, 5, None);
        assert!(matches!(result, Err(SelectionError::Ranking(_))));
    }

    #[test]
    fn test_short_crowding_order_is_an_error() {
        let population = population(6);

        // front 0 fits, front 1 has to be truncated but offers no order
        let result = Nsga2Selection::with_ranking(LossyCrowding)
            .select(&population, &layered_fitness(), 4, None);

        assert!(matches!(result, Err(SelectionError::Ranking(_))));
    }

    #[test]
    fn test_deterministic() {
        let population = population(6);
        let selection = Nsga2Selection::new();

        let a = selection
            .select(&population, &layered_fitness(), 3, None)
            .unwrap();
        let b = selection
            .select(&population, &layered_fitness(), 3, None)
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_too_many_parents() {
        let population = population(6);

        let result = Nsga2Selection::new().select(&population, &layered_fitness(), 7, None);

        assert_eq!(
            result,
            Err(SelectionError::TooManyParents {
                requested: 7,
                available: 6
            })
        );
    }

    #[test]
    fn test_fitness_mismatch() {
        let population = population(4);

        let result = Nsga2Selection::new().select(&population, &layered_fitness(), 2, None);

        assert!(matches!(
            result,
            Err(SelectionError::FitnessLengthMismatch { .. })
        ));
    }
}
