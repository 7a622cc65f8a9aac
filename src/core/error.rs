//! Error types for rate retrieval and conversion

use thiserror::Error;

/// Errors reported by rate providers.
#[derive(Error, Debug)]
pub enum Error {
    /// The rates source answered with a non-success status, or the
    /// requested rate was absent (or zero) in a successful payload.
    #[error("rates unavailable: {0}")]
    RatesUnavailable(String),

    /// A float amount was supplied to `convert` while decimal decoding
    /// is forced. Caller misuse, not a transient fault.
    #[error("convert requires a Decimal amount when decimal mode is forced")]
    DecimalFloatMismatch,

    /// Transport-level failure reported by the HTTP client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for rate operations.
pub type Result<T> = std::result::Result<T, Error>;
