//! Error types for instrument operations.

use thiserror::Error;

/// A specialized Result type for instrument operations.
pub type InstrumentResult<T> = Result<T, InstrumentError>;

/// Errors that can occur when building or valuing an instrument.
#[derive(Error, Debug)]
pub enum InstrumentError {
    /// Invalid instrument specification.
    #[error("Invalid debt specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// Maturity falls before issue.
    #[error("Maturity {maturity} is before issue {issue}")]
    MaturityBeforeIssue {
        /// Issue date.
        issue: String,
        /// Maturity date.
        maturity: String,
    },

    /// Core type error (dates, frequencies, rates).
    #[error("Core error: {0}")]
    Core(#[from] tvm_core::CoreError),

    /// Rate conversion failed.
    #[error("Analytics error: {0}")]
    Analytics(#[from] tvm_analytics::AnalyticsError),

    /// Benchmark lookup or fetch failed.
    #[error("Market data error: {0}")]
    MarketData(#[from] tvm_market::MarketDataError),
}

impl InstrumentError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
