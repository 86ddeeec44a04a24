//! # Pareto Ranking
//!
//! The multi-objective selectors consume two capabilities: a non-dominated sort
//! that partitions the population into Pareto fronts, and a crowding distance that
//! measures how isolated each member of a front is. Both are reached through the
//! [`ParetoRanking`] trait so that an optimizer can plug in its own implementation;
//! [`FastNonDominatedSort`] is the one shipped with the crate.
//!
//! All objectives are maximized: solution `a` dominates `b` when it is at least as
//! good in every objective and strictly better in at least one.
//!
//! ## Example
//!
//! ```rust
//! use genselect::pareto::{FastNonDominatedSort, FitnessMatrix, ParetoRanking};
//!
//! let fitness = FitnessMatrix::new(vec![
//!     vec![1.0, 4.0],
//!     vec![3.0, 3.0],
//!     vec![2.0, 1.0],
//!     vec![4.0, 1.0],
//! ]).unwrap();
//!
//! let ranking = FastNonDominatedSort::default();
//! let fronts = ranking.non_dominated_sorting(&fitness).unwrap();
//!
//! assert_eq!(fronts.front(0), Some(&[0, 1, 3][..]));
//! assert_eq!(fronts.front(1), Some(&[2][..]));
//! assert_eq!(fronts.front_of(2), Some(1));
//! ```

pub mod crowding_distance;
pub mod non_dominated_sort;

use std::fmt::Debug;

use crate::error::{Result, SelectionError};

pub use crowding_distance::crowding_distance;
pub use non_dominated_sort::{dominates, non_dominated_sort};

/// Fitness of a population under several objectives: one row per solution, one
/// column per objective.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessMatrix {
    values: Vec<f64>,
    num_solutions: usize,
    num_objectives: usize,
}

impl FitnessMatrix {
    /// Builds a matrix from one row of objective values per solution.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows have different lengths, if there are rows but no
    /// objectives, or if any value is NaN or infinite.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let num_solutions = rows.len();
        let num_objectives = rows.first().map_or(0, Vec::len);

        if num_solutions > 0 && num_objectives == 0 {
            return Err(SelectionError::Configuration(
                "Fitness matrix needs at least one objective".to_string(),
            ));
        }

        let mut values = Vec::with_capacity(num_solutions * num_objectives);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != num_objectives {
                return Err(SelectionError::Configuration(format!(
                    "Fitness row {} has {} objectives, expected {}",
                    idx,
                    row.len(),
                    num_objectives
                )));
            }
            if let Some(value) = row.iter().find(|value| !value.is_finite()) {
                return Err(SelectionError::InvalidNumericValue(format!(
                    "Fitness of solution {} contains {}",
                    idx, value
                )));
            }
            values.extend(row);
        }

        Ok(Self {
            values,
            num_solutions,
            num_objectives,
        })
    }

    /// Promotes a single-objective fitness vector to a one-column matrix.
    pub fn from_single_objective(fitness: &[f64]) -> Result<Self> {
        Self::new(fitness.iter().map(|&value| vec![value]).collect())
    }

    pub fn num_solutions(&self) -> usize {
        self.num_solutions
    }

    pub fn num_objectives(&self) -> usize {
        self.num_objectives
    }

    pub fn is_empty(&self) -> bool {
        self.num_solutions == 0
    }

    /// Objective values of the solution at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    pub fn row(&self, idx: usize) -> &[f64] {
        &self.values[idx * self.num_objectives..(idx + 1) * self.num_objectives]
    }

    /// Value of `objective` for the solution at `idx`.
    pub fn value(&self, idx: usize, objective: usize) -> f64 {
        self.values[idx * self.num_objectives + objective]
    }

    /// Bit-exact identity of the matrix, used to detect any change of fitness.
    pub(crate) fn fingerprint(&self) -> (usize, Vec<u64>) {
        (
            self.num_objectives,
            self.values.iter().map(|value| value.to_bits()).collect(),
        )
    }
}

/// Pareto fronts of a population together with the front index of every solution.
#[derive(Debug, Clone, PartialEq)]
pub struct ParetoFronts {
    fronts: Vec<Vec<usize>>,
    front_of: Vec<usize>,
}

impl ParetoFronts {
    /// Wraps externally computed fronts.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::Ranking` unless the fronts contain every index in
    /// `0..num_solutions` exactly once and no front is empty.
    pub fn new(fronts: Vec<Vec<usize>>, num_solutions: usize) -> Result<Self> {
        let mut front_of = vec![usize::MAX; num_solutions];

        for (front_idx, front) in fronts.iter().enumerate() {
            if front.is_empty() {
                return Err(SelectionError::Ranking(format!(
                    "Front {} is empty",
                    front_idx
                )));
            }
            for &solution in front {
                match front_of.get_mut(solution) {
                    Some(slot) if *slot == usize::MAX => *slot = front_idx,
                    Some(_) => {
                        return Err(SelectionError::Ranking(format!(
                            "Solution {} appears in more than one front",
                            solution
                        )))
                    }
                    None => {
                        return Err(SelectionError::Ranking(format!(
                            "Solution {} is outside of a population of {}",
                            solution, num_solutions
                        )))
                    }
                }
            }
        }

        if let Some(missing) = front_of.iter().position(|&slot| slot == usize::MAX) {
            return Err(SelectionError::Ranking(format!(
                "Solution {} is not assigned to any front",
                missing
            )));
        }

        Ok(Self { fronts, front_of })
    }

    pub fn fronts(&self) -> &[Vec<usize>] {
        &self.fronts
    }

    pub fn front(&self, front_idx: usize) -> Option<&[usize]> {
        self.fronts.get(front_idx).map(Vec::as_slice)
    }

    /// Index of the front holding `solution`.
    pub fn front_of(&self, solution: usize) -> Option<usize> {
        self.front_of.get(solution).copied()
    }

    pub fn num_fronts(&self) -> usize {
        self.fronts.len()
    }

    pub fn num_solutions(&self) -> usize {
        self.front_of.len()
    }
}

/// Crowding distance of the members of one front.
#[derive(Debug, Clone, PartialEq)]
pub struct CrowdingDistance {
    /// `per_objective[m][p]` is the contribution of objective `m` to front position `p`.
    pub per_objective: Vec<Vec<f64>>,
    /// Population index and summed distance of every front member, in front order.
    pub summed: Vec<(usize, f64)>,
    /// Front positions by descending summed distance.
    pub front_order: Vec<usize>,
    /// Population indices by descending summed distance.
    pub population_order: Vec<usize>,
}

impl CrowdingDistance {
    /// Summed distance of the solution at population index `solution`, if it is a
    /// member of the front.
    pub fn distance_of(&self, solution: usize) -> Option<f64> {
        self.summed
            .iter()
            .find(|(idx, _)| *idx == solution)
            .map(|(_, distance)| *distance)
    }
}

/// Non-dominated sorting and crowding distance, as consumed by the NSGA-II selectors.
pub trait ParetoRanking: Debug + Send + Sync {
    /// Partitions the population into Pareto fronts, best front first.
    fn non_dominated_sorting(&self, fitness: &FitnessMatrix) -> Result<ParetoFronts>;

    /// Computes the crowding distance of the members of `front`.
    fn crowding_distance(&self, front: &[usize], fitness: &FitnessMatrix)
        -> Result<CrowdingDistance>;
}

impl<R: ParetoRanking + ?Sized> ParetoRanking for &R {
    fn non_dominated_sorting(&self, fitness: &FitnessMatrix) -> Result<ParetoFronts> {
        (**self).non_dominated_sorting(fitness)
    }

    fn crowding_distance(
        &self,
        front: &[usize],
        fitness: &FitnessMatrix,
    ) -> Result<CrowdingDistance> {
        (**self).crowding_distance(front, fitness)
    }
}

/// Deb's fast non-dominated sort with the classic crowding distance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FastNonDominatedSort {
    /// Minimum population size at which the domination relation is computed in parallel.
    parallel_threshold: usize,
}

impl FastNonDominatedSort {
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}

impl Default for FastNonDominatedSort {
    fn default() -> Self {
        Self {
            parallel_threshold: 1000,
        }
    }
}

impl ParetoRanking for FastNonDominatedSort {
    fn non_dominated_sorting(&self, fitness: &FitnessMatrix) -> Result<ParetoFronts> {
        Ok(non_dominated_sort(fitness, self.parallel_threshold))
    }

    fn crowding_distance(
        &self,
        front: &[usize],
        fitness: &FitnessMatrix,
    ) -> Result<CrowdingDistance> {
        crowding_distance(front, fitness)
    }
}
