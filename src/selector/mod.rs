//! # Selector
//!
//! A [`Selector`] picks one selection method from [`SelectionOptions`] and runs it on
//! whatever fitness the optimizer has at hand. Methods can be named by their short
//! names (`"sss"`, `"rws"`, `"tournament_nsga2"`, ...), which makes the selector
//! the natural entry point for configuration-driven optimizers.
//!
//! ## Example
//!
//! ```rust
//! use genselect::population::{GeneTypeMode, Population};
//! use genselect::rng::RandomNumberGenerator;
//! use genselect::selector::{SelectionOptions, Selector};
//! use genselect::error::Result;
//!
//! fn main() -> Result<()> {
//!     let population = Population::new(
//!         vec![vec![0.0], vec![0.5], vec![1.0]],
//!         GeneTypeMode::Homogeneous,
//!     )?;
//!     let fitness = vec![1.0, 3.0, 2.0];
//!
//!     let options = SelectionOptions::builder()
//!         .method("tournament".parse()?)
//!         .tournament_size(2)
//!         .build();
//!     let selector = Selector::new(options)?;
//!
//!     let mut rng = RandomNumberGenerator::from_seed(42);
//!     let parents = selector.select(&population, &fitness, 2, Some(&mut rng))?;
//!
//!     assert_eq!(parents.len(), 2);
//!
//!     Ok(())
//! }
//! ```

pub mod options;
#[allow(clippy::module_inception)]
pub mod selector;

pub use options::{SelectionMethod, SelectionOptions, SelectionOptionsBuilder};
pub use selector::{Fitness, Selector};
