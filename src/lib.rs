pub mod caching;
pub mod error;
pub mod pareto;
pub mod population;
pub mod rng;
pub mod selection;
pub mod selector;

// Re-export commonly used types for convenience
pub use error::{OptionExt, Result, SelectionError};
pub use pareto::{FitnessMatrix, ParetoRanking};
pub use population::{GeneTypeMode, Parents, Population};
pub use rng::RandomNumberGenerator;
pub use selection::{MultiObjectiveSelection, SelectionStrategy};
pub use selector::{Fitness, SelectionMethod, SelectionOptions, Selector};
