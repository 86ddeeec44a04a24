//! # Error Types
//!
//! This module defines the error type shared by every selection operator.
//! Configuration problems are reported before any computation begins, while
//! [`SelectionError::ZeroFitnessSum`] is raised by the wheel-based selectors
//! when the fitness cannot be normalized into a probability distribution.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genselect::error::{Result, SelectionError};
//!
//! fn check_quota(requested: usize, available: usize) -> Result<()> {
//!     if requested > available {
//!         return Err(SelectionError::TooManyParents { requested, available });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_quota(2, 5).is_ok());
//! assert!(check_quota(6, 5).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genselect::error::{OptionExt, SelectionError};
//!
//! fn best_index(fitness: &[f64]) -> genselect::error::Result<usize> {
//!     fitness
//!         .iter()
//!         .enumerate()
//!         .max_by(|a, b| a.1.total_cmp(b.1))
//!         .map(|(idx, _)| idx)
//!         .ok_or_else_selection(|| SelectionError::EmptyPopulation)
//! }
//!
//! assert_eq!(best_index(&[0.1, 0.9, 0.4]).unwrap(), 1);
//! ```

use thiserror::Error;

/// Represents errors that can occur while selecting parents.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// The fitness values sum to zero where a probability distribution is required.
    #[error("Cannot proceed because the sum of fitness values is zero. Cannot divide by zero.")]
    ZeroFitnessSum,

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot select parents from an empty population")]
    EmptyPopulation,

    /// The fitness vector is not aligned with the population.
    #[error("Fitness length ({actual}) doesn't match population length ({expected})")]
    FitnessLengthMismatch { expected: usize, actual: usize },

    /// More parents were requested than the selector is able to provide.
    #[error("Requested {requested} parents but only {available} solutions are available")]
    TooManyParents { requested: usize, available: usize },

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when NaN or infinity values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// The ranking collaborator produced data that is inconsistent with the population.
    #[error("Ranking error: {0}")]
    Ranking(String),
}

/// A specialized Result type for selection operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `SelectionError`.
pub type Result<T> = std::result::Result<T, SelectionError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an Option to a Result using a closure to generate the error.
    fn ok_or_else_selection<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> SelectionError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_selection<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> SelectionError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SelectionError::ZeroFitnessSum.to_string(),
            "Cannot proceed because the sum of fitness values is zero. Cannot divide by zero."
        );
        assert_eq!(
            SelectionError::TooManyParents {
                requested: 4,
                available: 3
            }
            .to_string(),
            "Requested 4 parents but only 3 solutions are available"
        );
        assert_eq!(
            SelectionError::Configuration("bad".to_string()).to_string(),
            "Configuration error: bad"
        );
    }

    #[test]
    fn test_option_ext() {
        let some: Option<i32> = Some(7);
        assert_eq!(
            some.ok_or_else_selection(|| SelectionError::EmptyPopulation),
            Ok(7)
        );

        let none: Option<i32> = None;
        assert_eq!(
            none.ok_or_else_selection(|| SelectionError::EmptyPopulation),
            Err(SelectionError::EmptyPopulation)
        );
    }
}
