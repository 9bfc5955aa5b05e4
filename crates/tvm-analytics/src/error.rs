//! Error types for the analytics functions.

use thiserror::Error;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Error type for the checked analytics entry points.
///
/// The raw formulas in [`crate::functions`] never fail; they follow IEEE
/// semantics and hand back NaN or infinity on degenerate input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Input outside the domain of the formula
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The formula produced NaN or infinity
    #[error("non-finite result: {0}")]
    NonFinite(String),
}
