pub mod nsga2;
pub mod nsga2_tournament;
pub mod random;
pub mod rank;
pub mod roulette;
pub mod selection_strategy;
pub mod steady_state;
pub mod stochastic_universal;
pub mod tournament;
pub mod wheel;

use std::cmp::Ordering;

use crate::error::{OptionExt, Result, SelectionError};
use crate::pareto::ParetoFronts;
use crate::rng::RandomNumberGenerator;

pub use nsga2::Nsga2Selection;
pub use nsga2_tournament::Nsga2TournamentSelection;
pub use random::RandomSelection;
pub use rank::RankSelection;
pub use roulette::RouletteWheelSelection;
pub use selection_strategy::{MultiObjectiveSelection, SelectionStrategy};
pub use steady_state::SteadyStateSelection;
pub use stochastic_universal::StochasticUniversalSelection;
pub use tournament::TournamentSelection;
pub use wheel::{wheel_cumulative_probs, CumulativeWheel};

/// Checks the inputs shared by every selector.
pub(crate) fn validate_inputs(population_len: usize, fitness_len: usize) -> Result<()> {
    if population_len == 0 {
        return Err(SelectionError::EmptyPopulation);
    }

    if fitness_len != population_len {
        return Err(SelectionError::FitnessLengthMismatch {
            expected: population_len,
            actual: fitness_len,
        });
    }

    Ok(())
}

/// Rejects requests that cannot be served without repeating a solution.
pub(crate) fn validate_quota(num_parents: usize, available: usize) -> Result<()> {
    if num_parents > available {
        return Err(SelectionError::TooManyParents {
            requested: num_parents,
            available,
        });
    }
    Ok(())
}

/// Rejects fronts that do not rank exactly the solutions of the population.
pub(crate) fn validate_fronts(fronts: &ParetoFronts, population_len: usize) -> Result<()> {
    if fronts.num_solutions() != population_len {
        return Err(SelectionError::Ranking(format!(
            "Fronts rank {} solutions but the population has {}",
            fronts.num_solutions(),
            population_len
        )));
    }
    Ok(())
}

pub(crate) fn require_rng<'r>(
    rng: Option<&'r mut RandomNumberGenerator>,
    strategy: &str,
) -> Result<&'r mut RandomNumberGenerator> {
    rng.ok_or_else_selection(|| {
        SelectionError::Configuration(format!(
            "{} requires a random number generator",
            strategy
        ))
    })
}

/// Ascending fitness order where NaN ranks below every real value.
pub(crate) fn compare_fitness(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| {
        if a.is_nan() && b.is_nan() {
            Ordering::Equal
        } else if a.is_nan() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    })
}

/// Population indices stable-sorted by ascending fitness.
pub(crate) fn ascending_order(fitness: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..fitness.len()).collect();
    indices.sort_by(|&a, &b| compare_fitness(fitness[a], fitness[b]));
    indices
}

/// Divides every fitness value by the fitness sum.
///
/// Logs and fails with `ZeroFitnessSum` if the sum is exactly zero.
pub(crate) fn normalized_fitness(fitness: &[f64]) -> Result<Vec<f64>> {
    let fitness_sum: f64 = fitness.iter().sum();

    if fitness_sum == 0.0 {
        let err = SelectionError::ZeroFitnessSum;
        tracing::error!("{}", err);
        return Err(err);
    }

    Ok(fitness.iter().map(|&f| f / fitness_sum).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_inputs() {
        assert_eq!(validate_inputs(0, 0), Err(SelectionError::EmptyPopulation));
        assert_eq!(
            validate_inputs(3, 2),
            Err(SelectionError::FitnessLengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert!(validate_inputs(3, 3).is_ok());
    }

    #[test]
    fn test_validate_quota() {
        assert!(validate_quota(3, 3).is_ok());
        assert_eq!(
            validate_quota(4, 3),
            Err(SelectionError::TooManyParents {
                requested: 4,
                available: 3
            })
        );
    }

    #[test]
    fn test_validate_fronts() {
        let fronts = ParetoFronts::new(vec![vec![0, 2], vec![1]], 3).unwrap();

        assert!(validate_fronts(&fronts, 3).is_ok());
        assert!(matches!(
            validate_fronts(&fronts, 4),
            Err(SelectionError::Ranking(_))
        ));
        assert!(matches!(
            validate_fronts(&fronts, 2),
            Err(SelectionError::Ranking(_))
        ));
    }

    #[test]
    fn test_require_rng() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        assert!(require_rng(Some(&mut rng), "Test").is_ok());
        assert!(matches!(
            require_rng(None, "Test"),
            Err(SelectionError::Configuration(_))
        ));
    }

    #[test]
    fn test_ascending_order_is_stable_and_nan_first() {
        let order = ascending_order(&[0.5, f64::NAN, 0.1, 0.5]);
        assert_eq!(order, vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_normalized_fitness() {
        let probs = normalized_fitness(&[1.0, 3.0]).unwrap();
        assert_eq!(probs, vec![0.25, 0.75]);

        assert_eq!(
            normalized_fitness(&[0.0, 0.0, 0.0]),
            Err(SelectionError::ZeroFitnessSum)
        );
        // values cancelling out are a zero sum as well
        assert_eq!(
            normalized_fitness(&[2.0, -2.0]),
            Err(SelectionError::ZeroFitnessSum)
        );
    }
}
