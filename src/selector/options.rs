//! # SelectionOptions
//!
//! The `SelectionOptions` struct represents the configuration of a [`Selector`]:
//! which selection method to run and the parameters of the methods that need them.
//!
//! ## Example
//!
//! ```rust
//! use genselect::selector::options::{SelectionMethod, SelectionOptions};
//!
//! // Create a new SelectionOptions instance for tournament selection
//! let custom_options = SelectionOptions::new(SelectionMethod::Tournament);
//!
//! // Pick the method by its conventional short name
//! let parsed: SelectionMethod = "sus".parse().unwrap();
//! assert_eq!(parsed, SelectionMethod::StochasticUniversal);
//!
//! // Create a new SelectionOptions instance with default parameters
//! let default_options = SelectionOptions::default();
//! assert_eq!(default_options.get_method(), SelectionMethod::SteadyState);
//! ```
//!
//! ## Fields
//!
//! - `method`: The selection method, represented by the `SelectionMethod` enum.
//! - `tournament_size`: The number of candidates per tournament.
//! - `num_parents_mating`: The size of the mating pool, which spaces the pointers of
//!   stochastic universal sampling.
//! - `parallel_threshold`: The minimum population size at which non-dominated sorting
//!   runs in parallel.
//!
//! [`Selector`]: crate::selector::Selector

use std::fmt;
use std::str::FromStr;

use crate::error::SelectionError;

/// The parent selection methods a [`Selector`](crate::selector::Selector) can run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionMethod {
    /// Keeps the best solutions, without randomness.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "sss"))]
    SteadyState,
    #[cfg_attr(feature = "serde", serde(rename = "random"))]
    Random,
    #[cfg_attr(feature = "serde", serde(rename = "rank"))]
    Rank,
    #[cfg_attr(feature = "serde", serde(rename = "rws"))]
    RouletteWheel,
    #[cfg_attr(feature = "serde", serde(rename = "tournament"))]
    Tournament,
    #[cfg_attr(feature = "serde", serde(rename = "sus"))]
    StochasticUniversal,
    /// Tournaments decided by Pareto front, then crowding distance.
    #[cfg_attr(feature = "serde", serde(rename = "tournament_nsga2"))]
    Nsga2Tournament,
    /// Deterministic front-by-front survival.
    #[cfg_attr(feature = "serde", serde(rename = "nsga2"))]
    Nsga2,
}

impl SelectionMethod {
    pub const ALL: [SelectionMethod; 8] = [
        SelectionMethod::SteadyState,
        SelectionMethod::Random,
        SelectionMethod::Rank,
        SelectionMethod::RouletteWheel,
        SelectionMethod::Tournament,
        SelectionMethod::StochasticUniversal,
        SelectionMethod::Nsga2Tournament,
        SelectionMethod::Nsga2,
    ];

    /// The conventional short name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            SelectionMethod::SteadyState => "sss",
            SelectionMethod::Random => "random",
            SelectionMethod::Rank => "rank",
            SelectionMethod::RouletteWheel => "rws",
            SelectionMethod::Tournament => "tournament",
            SelectionMethod::StochasticUniversal => "sus",
            SelectionMethod::Nsga2Tournament => "tournament_nsga2",
            SelectionMethod::Nsga2 => "nsga2",
        }
    }

    /// Returns `true` for the methods that rank solutions by Pareto front.
    pub fn is_multi_objective(&self) -> bool {
        matches!(
            self,
            SelectionMethod::Nsga2Tournament | SelectionMethod::Nsga2
        )
    }

    /// Returns `true` for the methods that draw random numbers.
    pub fn is_randomized(&self) -> bool {
        !matches!(self, SelectionMethod::SteadyState | SelectionMethod::Nsga2)
    }
}

impl fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SelectionMethod {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SelectionMethod::ALL
            .iter()
            .copied()
            .find(|method| method.name() == s)
            .ok_or_else(|| {
                SelectionError::Configuration(format!("Unknown selection method: {}", s))
            })
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOptions {
    method: SelectionMethod,
    tournament_size: usize,
    num_parents_mating: usize,
    /// Minimum population size at which non-dominated sorting runs in parallel
    parallel_threshold: usize,
}

impl SelectionOptions {
    /// Creates options for `method` with default parameters.
    pub fn new(method: SelectionMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Creates a new `SelectionOptions` instance with all parameters specified.
    ///
    /// # Arguments
    ///
    /// * `method` - The selection method.
    /// * `tournament_size` - The number of candidates per tournament.
    /// * `num_parents_mating` - The size of the mating pool.
    /// * `parallel_threshold` - The minimum population size for parallel sorting.
    pub fn new_with_parameters(
        method: SelectionMethod,
        tournament_size: usize,
        num_parents_mating: usize,
        parallel_threshold: usize,
    ) -> Self {
        Self {
            method,
            tournament_size,
            num_parents_mating,
            parallel_threshold,
        }
    }

    pub fn get_method(&self) -> SelectionMethod {
        self.method
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_num_parents_mating(&self) -> usize {
        self.num_parents_mating
    }

    /// Returns the minimum population size for parallel sorting.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Sets the selection method.
    pub fn set_method(&mut self, method: SelectionMethod) {
        self.method = method;
    }

    /// Sets the tournament size.
    pub fn set_tournament_size(&mut self, tournament_size: usize) {
        self.tournament_size = tournament_size;
    }

    /// Sets the size of the mating pool.
    pub fn set_num_parents_mating(&mut self, num_parents_mating: usize) {
        self.num_parents_mating = num_parents_mating;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Returns a builder for creating a `SelectionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use genselect::selector::options::{SelectionMethod, SelectionOptions};
    ///
    /// let options = SelectionOptions::builder()
    ///     .method(SelectionMethod::Nsga2Tournament)
    ///     .tournament_size(4)
    ///     .parallel_threshold(500)
    ///     .build();
    ///
    /// assert_eq!(options.get_tournament_size(), 4);
    /// assert_eq!(options.get_num_parents_mating(), 2);
    /// ```
    pub fn builder() -> SelectionOptionsBuilder {
        SelectionOptionsBuilder::default()
    }
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            method: SelectionMethod::SteadyState,
            tournament_size: 3,
            num_parents_mating: 2,
            parallel_threshold: 1000,
        }
    }
}

/// Builder for `SelectionOptions`.
///
/// Parameters left unset take their default values. Nothing is validated here;
/// [`Selector::new`](crate::selector::Selector::new) rejects unusable options.
#[derive(Debug, Clone, Default)]
pub struct SelectionOptionsBuilder {
    method: Option<SelectionMethod>,
    tournament_size: Option<usize>,
    num_parents_mating: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl SelectionOptionsBuilder {
    /// Sets the selection method.
    pub fn method(mut self, value: SelectionMethod) -> Self {
        self.method = Some(value);
        self
    }

    /// Sets the tournament size.
    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    /// Sets the size of the mating pool.
    pub fn num_parents_mating(mut self, value: usize) -> Self {
        self.num_parents_mating = Some(value);
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `SelectionOptions` instance.
    pub fn build(self) -> SelectionOptions {
        let defaults = SelectionOptions::default();
        SelectionOptions {
            method: self.method.unwrap_or(defaults.method),
            tournament_size: self.tournament_size.unwrap_or(defaults.tournament_size),
            num_parents_mating: self
                .num_parents_mating
                .unwrap_or(defaults.num_parents_mating),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SelectionOptions::default();

        assert_eq!(options.get_method(), SelectionMethod::SteadyState);
        assert_eq!(options.get_tournament_size(), 3);
        assert_eq!(options.get_num_parents_mating(), 2);
        assert_eq!(options.get_parallel_threshold(), 1000);
        assert_eq!(SelectionOptions::builder().build(), options);
    }

    #[test]
    fn test_builder_and_setters_agree() {
        let built = SelectionOptions::builder()
            .method(SelectionMethod::StochasticUniversal)
            .tournament_size(5)
            .num_parents_mating(8)
            .parallel_threshold(10)
            .build();

        let mut set = SelectionOptions::default();
        set.set_method(SelectionMethod::StochasticUniversal);
        set.set_tournament_size(5);
        set.set_num_parents_mating(8);
        set.set_parallel_threshold(10);

        assert_eq!(built, set);
        assert_eq!(
            built,
            SelectionOptions::new_with_parameters(SelectionMethod::StochasticUniversal, 5, 8, 10)
        );
    }

    #[test]
    fn test_method_names_round_trip() {
        for method in SelectionMethod::ALL {
            assert_eq!(method.name().parse::<SelectionMethod>(), Ok(method));
            assert_eq!(method.to_string(), method.name());
        }
    }

    #[test]
    fn test_unknown_method_name() {
        let result = "elitist".parse::<SelectionMethod>();
        assert!(matches!(result, Err(SelectionError::Configuration(_))));
    }

    #[test]
    fn test_method_classification() {
        assert!(SelectionMethod::Nsga2.is_multi_objective());
        assert!(SelectionMethod::Nsga2Tournament.is_multi_objective());
        assert!(!SelectionMethod::Rank.is_multi_objective());

        assert!(!SelectionMethod::SteadyState.is_randomized());
        assert!(!SelectionMethod::Nsga2.is_randomized());
        assert!(SelectionMethod::Nsga2Tournament.is_randomized());
        assert!(SelectionMethod::RouletteWheel.is_randomized());
    }
}
