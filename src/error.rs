//! Error types for the Employee Analytics Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while generating and analyzing
//! employee batches.

use thiserror::Error;

/// The main error type for the Employee Analytics Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use employee_analytics::error::EngineError;
///
/// let error = EngineError::InvalidSection { section: 7 };
/// assert_eq!(error.to_string(), "Unknown output section: 7 (expected 1-4)");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A statistic that needs at least one value was computed over nothing.
    #[error("Cannot compute {statistic} of an empty input")]
    EmptyInput {
        /// The statistic that was requested.
        statistic: String,
    },

    /// An output section outside 1-4 was requested.
    #[error("Unknown output section: {section} (expected 1-4)")]
    InvalidSection {
        /// The section number that was requested.
        section: u8,
    },

    /// A generation or prompt parameter failed validation.
    #[error("Invalid parameter '{field}': {message}")]
    InvalidParameter {
        /// The parameter that was invalid.
        field: String,
        /// A description of what made the parameter invalid.
        message: String,
    },

    /// An hour count that is not one of the known workload levels.
    #[error("Invalid workload: {hours} (expected 10, 20, 30 or 40)")]
    InvalidWorkload {
        /// The rejected hour count.
        hours: u8,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidParameter`].
    pub fn invalid_parameter(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
