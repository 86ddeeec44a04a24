use std::borrow::Cow;

use crate::error::{Result, SelectionError};
use crate::pareto::{FastNonDominatedSort, FitnessMatrix, ParetoRanking};
use crate::population::{Gene, Parents, Population};
use crate::rng::RandomNumberGenerator;
use crate::selection::{
    MultiObjectiveSelection, Nsga2Selection, Nsga2TournamentSelection, RandomSelection,
    RankSelection, RouletteWheelSelection, SelectionStrategy, SteadyStateSelection,
    StochasticUniversalSelection, TournamentSelection,
};

use super::options::{SelectionMethod, SelectionOptions};

/// Fitness handed to a [`Selector`].
#[derive(Debug, Clone, Copy)]
pub enum Fitness<'a> {
    /// One value per solution.
    Single(&'a [f64]),
    /// One row of objective values per solution.
    Multi(&'a FitnessMatrix),
}

impl<'a> Fitness<'a> {
    pub fn num_solutions(&self) -> usize {
        match self {
            Fitness::Single(values) => values.len(),
            Fitness::Multi(matrix) => matrix.num_solutions(),
        }
    }

    fn single_objective(self, method: SelectionMethod) -> Result<&'a [f64]> {
        match self {
            Fitness::Single(values) => Ok(values),
            Fitness::Multi(matrix) => Err(SelectionError::Configuration(format!(
                "Selection method '{}' expects a single objective, got {}",
                method,
                matrix.num_objectives()
            ))),
        }
    }

    /// Single-objective fitness becomes a one-column matrix.
    fn to_matrix(self) -> Result<Cow<'a, FitnessMatrix>> {
        match self {
            Fitness::Single(values) => Ok(Cow::Owned(FitnessMatrix::from_single_objective(values)?)),
            Fitness::Multi(matrix) => Ok(Cow::Borrowed(matrix)),
        }
    }
}

impl<'a> From<&'a [f64]> for Fitness<'a> {
    fn from(values: &'a [f64]) -> Self {
        Fitness::Single(values)
    }
}

impl<'a> From<&'a Vec<f64>> for Fitness<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        Fitness::Single(values)
    }
}

impl<'a> From<&'a FitnessMatrix> for Fitness<'a> {
    fn from(matrix: &'a FitnessMatrix) -> Self {
        Fitness::Multi(matrix)
    }
}

/// Runs the selection method named by its [`SelectionOptions`].
///
/// The options are validated once, when the selector is created. The
/// multi-objective methods rank solutions through `R`, which defaults to
/// [`FastNonDominatedSort`] configured with the options' parallel threshold.
#[derive(Debug, Clone)]
pub struct Selector<R = FastNonDominatedSort> {
    options: SelectionOptions,
    tournament: TournamentSelection,
    stochastic_universal: StochasticUniversalSelection,
    ranking: R,
}

impl Selector {
    /// Creates a new selector.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::Configuration` if the tournament size or the size of
    /// the mating pool is 0.
    pub fn new(options: SelectionOptions) -> Result<Self> {
        let ranking = FastNonDominatedSort::new(options.get_parallel_threshold());
        Self::with_ranking(options, ranking)
    }
}

impl<R: ParetoRanking> Selector<R> {
    /// Creates a new selector whose multi-objective methods rank through `ranking`.
    pub fn with_ranking(options: SelectionOptions, ranking: R) -> Result<Self> {
        let tournament = TournamentSelection::new(options.get_tournament_size())?;
        let stochastic_universal =
            StochasticUniversalSelection::new(options.get_num_parents_mating())?;

        tracing::debug!(
            method = %options.get_method(),
            tournament_size = options.get_tournament_size(),
            num_parents_mating = options.get_num_parents_mating(),
            "selector configured"
        );

        Ok(Self {
            options,
            tournament,
            stochastic_universal,
            ranking,
        })
    }

    pub fn options(&self) -> &SelectionOptions {
        &self.options
    }

    pub fn method(&self) -> SelectionMethod {
        self.options.get_method()
    }

    pub fn ranking(&self) -> &R {
        &self.ranking
    }

    /// Selects `num_parents` parents from `population`.
    ///
    /// `rng` may be `None` only for the deterministic methods. The multi-objective
    /// methods accept single-objective fitness as a one-column matrix; the others
    /// reject a matrix with `SelectionError::Configuration`.
    pub fn select<'f, G: Gene>(
        &self,
        population: &Population<G>,
        fitness: impl Into<Fitness<'f>>,
        num_parents: usize,
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Parents<G>> {
        let fitness = fitness.into();
        let method = self.method();

        if method.is_multi_objective() {
            let matrix = fitness.to_matrix()?;
            return match method {
                SelectionMethod::Nsga2Tournament => Nsga2TournamentSelection::with_ranking(
                    self.options.get_tournament_size(),
                    &self.ranking,
                )?
                .select(population, &matrix, num_parents, rng),
                _ => Nsga2Selection::with_ranking(&self.ranking).select(
                    population,
                    &matrix,
                    num_parents,
                    rng,
                ),
            };
        }

        let values = fitness.single_objective(method)?;
        let strategy: &dyn SelectionStrategy<G> = match method {
            SelectionMethod::SteadyState => &SteadyStateSelection,
            SelectionMethod::Random => &RandomSelection,
            SelectionMethod::Rank => &RankSelection,
            SelectionMethod::RouletteWheel => &RouletteWheelSelection,
            SelectionMethod::Tournament => &self.tournament,
            _ => &self.stochastic_universal,
        };
        strategy.select(population, values, num_parents, rng)
    }
}
