use std::cmp::Ordering;

use crate::error::{Result, SelectionError};
use crate::population::{Gene, Parents, Population};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::selection::{compare_fitness, require_rng, validate_inputs};

/// A selection strategy that selects parents through tournaments.
///
/// For every parent, `tournament_size` solutions are drawn uniformly at random with
/// replacement and the one with the highest fitness wins; among equal fitness the
/// candidate drawn first wins. NaN loses to every real value. Tournaments are independent, so a solution may win
/// several of them.
///
/// Smaller tournaments lead to more exploration, larger ones to more exploitation.
/// A tournament size of 1 is equivalent to random selection.
///
/// # Examples
///
/// ```
/// use genselect::population::{GeneTypeMode, Population};
/// use genselect::rng::RandomNumberGenerator;
/// use genselect::selection::{SelectionStrategy, TournamentSelection};
/// use genselect::error::Result;
///
/// fn main() -> Result<()> {
///     let population = Population::new(
///         vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0], vec![5.0]],
///         GeneTypeMode::Homogeneous,
///     )?;
///     let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     let selection = TournamentSelection::new(3)?;
///     let parents = selection.select(&population, &fitness, 3, Some(&mut rng))?;
///
///     assert_eq!(parents.len(), 3);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(SelectionError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn with_tournament_size(mut self, tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(SelectionError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        self.tournament_size = tournament_size;
        Ok(self)
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let participants = rng.fetch_indices(fitness.len(), self.tournament_size);

        let mut best_idx = participants[0];
        let mut best_fitness = fitness[best_idx];

        for &idx in &participants[1..] {
            if compare_fitness(fitness[idx], best_fitness) == Ordering::Greater {
                best_idx = idx;
                best_fitness = fitness[idx];
            }
        }

        best_idx
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 3 }
    }
}

impl<G> SelectionStrategy<G> for TournamentSelection
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
        let rng = require_rng(rng, "Tournament selection")?;

        tracing::debug!(
            num_parents,
            population_size = population.len(),
            tournament_size = self.tournament_size,
            "tournament selection"
        );

        let mut parents = Parents::allocate(population, num_parents);
        for _ in 0..num_parents {
            let winner_idx = self.run_tournament(fitness, rng);
            parents.push_from(population, winner_idx);
        }

        Ok(parents)
    }
}
