//! Error types for the TVM library.
//!
//! This module defines the error type shared by the core domain types,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Unknown or non-positive compounding frequency.
    #[error("Invalid frequency: {value}")]
    InvalidFrequency {
        /// The rejected input, as given.
        value: String,
    },

    /// Invalid rate value.
    #[error("Invalid rate: {value} - {reason}")]
    InvalidRate {
        /// The invalid rate value.
        value: f64,
        /// Reason for invalidity.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid frequency error.
    #[must_use]
    pub fn invalid_frequency(value: impl Into<String>) -> Self {
        Self::InvalidFrequency {
            value: value.into(),
        }
    }

    /// Creates an invalid rate error.
    #[must_use]
    pub fn invalid_rate(value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidRate {
            value,
            reason: reason.into(),
        }
    }
}
