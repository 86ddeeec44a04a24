use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{OptionExt, Result, SelectionError};
use crate::pareto::{
    CrowdingDistance, FastNonDominatedSort, FitnessMatrix, ParetoFronts, ParetoRanking,
};
use crate::population::{Gene, Parents, Population};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::MultiObjectiveSelection;
use crate::selection::{require_rng, validate_fronts, validate_inputs};

/// Outcome of comparing two tournament candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DuelResult {
    LeftWins,
    RightWins,
    Tie,
}

/// Tournament selection driven by Pareto rank and crowding distance.
///
/// For every parent, `tournament_size` candidates are drawn uniformly at random
/// with replacement and reduced pairwise: the candidate on the lower front wins;
/// on the same front the one with the larger crowding distance wins; a remaining
/// tie is settled by a fair coin. A front with a single member needs no crowding
/// distance.
///
/// # Examples
///
/// ```
/// use genselect::pareto::FitnessMatrix;
/// use genselect::population::{GeneTypeMode, Population};
/// use genselect::rng::RandomNumberGenerator;
/// use genselect::selection::{MultiObjectiveSelection, Nsga2TournamentSelection};
/// use genselect::error::Result;
///
/// fn main() -> Result<()> {
///     let population = Population::new(
///         vec![vec![0.1], vec![0.2], vec![0.3]],
///         GeneTypeMode::Homogeneous,
///     )?;
///     let fitness = FitnessMatrix::new(vec![
///         vec![3.0, 3.0],
///         vec![1.0, 2.0],
///         vec![2.0, 1.0],
///     ])?;
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     let selection = Nsga2TournamentSelection::new(2)?;
///     let parents = selection.select(&population, &fitness, 4, Some(&mut rng))?;
///
///     assert_eq!(parents.len(), 4);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Nsga2TournamentSelection<R = FastNonDominatedSort> {
    tournament_size: usize,
    ranking: R,
}

impl Nsga2TournamentSelection {
    /// Creates a new strategy ranked by [`FastNonDominatedSort`].
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        Self::with_ranking(tournament_size, FastNonDominatedSort::default())
    }
}

impl<R: ParetoRanking> Nsga2TournamentSelection<R> {
    /// Creates a new strategy with a custom ranking collaborator.
    pub fn with_ranking(tournament_size: usize, ranking: R) -> Result<Self> {
        if tournament_size < 1 {
            return Err(SelectionError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            tournament_size,
            ranking,
        })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn ranking(&self) -> &R {
        &self.ranking
    }

    /// Compares two candidates. Crowding distances are computed lazily, once per
    /// front, and kept in `crowding` for the rest of the call.
    fn duel(
        &self,
        left: usize,
        right: usize,
        fronts: &ParetoFronts,
        fitness: &FitnessMatrix,
        crowding: &mut HashMap<usize, CrowdingDistance>,
    ) -> Result<DuelResult> {
        let left_front = front_of(fronts, left)?;
        let right_front = front_of(fronts, right)?;

        if left_front < right_front {
            return Ok(DuelResult::LeftWins);
        }
        if right_front < left_front {
            return Ok(DuelResult::RightWins);
        }

        let front = fronts.front(left_front).ok_or_else_selection(|| {
            SelectionError::Ranking(format!("Front {} does not exist", left_front))
        })?;
        if front.len() == 1 {
            return Ok(DuelResult::LeftWins);
        }

        let distances = match crowding.entry(left_front) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(self.ranking.crowding_distance(front, fitness)?),
        };
        let left_distance = distance_of(distances, left)?;
        let right_distance = distance_of(distances, right)?;

        Ok(if left_distance > right_distance {
            DuelResult::LeftWins
        } else if right_distance > left_distance {
            DuelResult::RightWins
        } else {
            DuelResult::Tie
        })
    }
}

fn front_of(fronts: &ParetoFronts, solution: usize) -> Result<usize> {
    fronts.front_of(solution).ok_or_else_selection(|| {
        SelectionError::Ranking(format!("Solution {} has no front", solution))
    })
}

fn distance_of(distances: &CrowdingDistance, solution: usize) -> Result<f64> {
    distances.distance_of(solution).ok_or_else_selection(|| {
        SelectionError::Ranking(format!("Solution {} has no crowding distance", solution))
    })
}

impl<G, R> MultiObjectiveSelection<G> for Nsga2TournamentSelection<R>
where
    G: Gene,
    R: ParetoRanking,
{
    fn select(
        &self,
        population: &Population<G>,
        fitness: &FitnessMatrix,
        num_parents: usize,
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Parents<G>> {
        validate_inputs(population.len(), fitness.num_solutions())?;
        let rng = require_rng(rng, "NSGA-II tournament selection")?;

        tracing::debug!(
            num_parents,
            population_size = population.len(),
            tournament_size = self.tournament_size,
            "NSGA-II tournament selection"
        );

        let fronts = self.ranking.non_dominated_sorting(fitness)?;
        validate_fronts(&fronts, population.len())?;

        let mut crowding = HashMap::new();
        let mut parents = Parents::allocate(population, num_parents);

        for _ in 0..num_parents {
            let candidates = rng.fetch_indices(population.len(), self.tournament_size);

            let mut winner = candidates[0];
            for &challenger in &candidates[1..] {
                winner = match self.duel(winner, challenger, &fronts, fitness, &mut crowding)? {
                    DuelResult::LeftWins => winner,
                    DuelResult::RightWins => challenger,
                    DuelResult::Tie if rng.coin_flip() => winner,
                    DuelResult::Tie => challenger,
                };
            }

            tracing::trace!(winner, front = fronts.front_of(winner), "tournament winner");
            parents.push_from(population, winner);
        }

        Ok(parents)
    }
}
