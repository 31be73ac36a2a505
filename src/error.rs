//! # Error Types
//!
//! This module defines the error type shared by every stage of the evolution
//! engine. Validation fails fast at the boundary of the offending operation:
//! configuration values are checked when options are built, crossover weights
//! when a recombination pipeline is assembled, and population indices when a
//! slot is accessed.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use evogen::error::{GeneticError, Result};
//!
//! fn check_weight(weight: f64) -> Result<f64> {
//!     if weight <= 0.0 || weight >= 1.0 {
//!         return Err(GeneticError::InvalidWeight(weight));
//!     }
//!     Ok(weight)
//! }
//!
//! assert!(check_weight(0.5).is_ok());
//! assert!(check_weight(1.0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use evogen::error::{GeneticError, OptionExt};
//!
//! fn first_score(scores: &[f64]) -> evogen::error::Result<f64> {
//!     scores.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//! ```
//!
//! Using the `ResultExt` trait to add context to foreign errors:
//!
//! ```rust
//! use evogen::error::{Result, ResultExt};
//! use std::io::Write;
//!
//! fn write_header(out: &mut Vec<u8>) -> Result<()> {
//!     writeln!(out, "generation,fitness,chromosome").context("Failed to write header")
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while configuring or running the engine.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// An invalid configuration value, such as a zero population size.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A crossover weight outside the open interval `(0, 1)`.
    #[error("Invalid weight: {0} is outside the open interval (0, 1)")]
    InvalidWeight(f64),

    /// An index outside `[0, len)` for one of the population slots.
    #[error("Index out of range: index {index} is outside [0, {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The searched chromosome is not a member of the population.
    #[error("No such chromosome in the population found")]
    ChromosomeNotFound,

    /// An operation required at least one chromosome.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A recombination could not be carried out, e.g. parents of different lengths.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// A fitness function produced an unusable score.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// The persistence sink rejected a generation record.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for engine operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// The foreign error is converted to `GeneticError::Other` carrying both the
/// context and the original message.
pub trait ResultExt<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an Option to a Result using a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Checks that a probability-like option lies in `[0, 1]`.
pub(crate) fn ensure_unit_interval(name: &str, value: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GeneticError::Configuration(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )));
    }
    Ok(value)
}
