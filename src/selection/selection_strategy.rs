use std::fmt::Debug;

use crate::error::Result;
use crate::pareto::FitnessMatrix;
use crate::population::{Gene, Parents, Population};
use crate::rng::RandomNumberGenerator;

/// Trait for single-objective parent selection strategies.
///
/// Selection strategies are responsible for choosing parents from a population
/// based on their fitness scores. Higher fitness is better.
///
/// # Examples
///
/// ```
/// use genselect::population::{GeneTypeMode, Population};
/// use genselect::rng::RandomNumberGenerator;
/// use genselect::selection::{SelectionStrategy, SteadyStateSelection};
/// use genselect::error::Result;
///
/// fn main() -> Result<()> {
///     let population = Population::new(
///         vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]],
///         GeneTypeMode::Homogeneous,
///     )?;
///     let fitness = vec![0.5, 0.8, 0.3];
///     let mut rng = RandomNumberGenerator::new();
///
///     let selection = SteadyStateSelection::new();
///     let parents = selection.select(&population, &fitness, 2, Some(&mut rng))?;
///
///     assert_eq!(parents.len(), 2);
///     assert_eq!(parents.indices(), &[1, 0]);
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<G>: Debug + Send + Sync
where
    G: Gene,
{
    /// Selects `num_parents` parents from the population.
    ///
    /// # Arguments
    ///
    /// * `population` - The current population.
    /// * `fitness` - The fitness score of each solution, aligned with the population.
    /// * `num_parents` - The number of parents to select.
    /// * `rng` - The random number generator for strategies that use randomness.
    ///   If a strategy requires randomness but `rng` is `None`, an error is returned.
    ///
    /// # Returns
    ///
    /// Exactly `num_parents` copied solutions with their population indices.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness length doesn't match the population length
    /// - The strategy requires randomness but `rng` is `None`
    /// - The strategy cannot build a probability distribution from the fitness
    fn select(
        &self,
        population: &Population<G>,
        fitness: &[f64],
        num_parents: usize,
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Parents<G>>;
}

/// Trait for multi-objective parent selection strategies.
///
/// The fitness holds one row per solution and one column per objective; every
/// objective is maximized.
pub trait MultiObjectiveSelection<G>: Debug + Send + Sync
where
    G: Gene,
{
    /// Selects `num_parents` parents from the population using Pareto dominance.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty, if the fitness matrix is not
    /// aligned with the population, if the strategy requires randomness but `rng` is
    /// `None`, or if the ranking collaborator fails.
    fn select(
        &self,
        population: &Population<G>,
        fitness: &FitnessMatrix,
        num_parents: usize,
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Parents<G>>;
}
