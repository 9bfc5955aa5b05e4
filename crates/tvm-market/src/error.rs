//! Error types for benchmark sources.

use thiserror::Error;

/// A specialized Result type for market data operations.
pub type MarketResult<T> = Result<T, MarketDataError>;

/// Error type for fetching and parsing benchmark rates.
#[derive(Debug, Error)]
pub enum MarketDataError {
    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// Status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// A fixed marker was not found in the fetched page
    #[error("marker {marker:?} not found after byte {offset}")]
    MarkerNotFound {
        /// The literal that was searched for
        marker: String,
        /// Byte offset the search started from
        offset: usize,
    },

    /// Response or file content could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// No benchmark rate for the requested tenor
    #[error("benchmark not found for tenor {0} days")]
    TenorNotFound(u32),

    /// Invalid or incomplete configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
