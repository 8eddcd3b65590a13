//! Unified client error types.

use thiserror::Error;

/// Top-level client error.
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The pair is not tracked by the venue after a successful refresh.
    #[error("Pair not found: {trading}/{settlement}")]
    NotFound { trading: String, settlement: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unsupported by {venue}: {operation}")]
    Unsupported {
        venue: &'static str,
        operation: &'static str,
    },

    #[error("Unknown venue: {0}")]
    UnknownVenue(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The venue or depth source answered, but with nothing usable.
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl ExchangeError {
    pub fn not_found(trading: &str, settlement: &str) -> Self {
        ExchangeError::NotFound {
            trading: trading.to_string(),
            settlement: settlement.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ExchangeError::NotFound { .. })
    }
}

/// Transport-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connection(String),
}

impl HttpError {
    /// Map a non-success status code and body to an error.
    pub fn from_status(status: u16, body: String, retry_after_ms: Option<u64>) -> Self {
        match status {
            401 => HttpError::Unauthorized,
            404 => HttpError::NotFound(body),
            408 => HttpError::Timeout,
            429 => HttpError::RateLimited { retry_after_ms },
            400..=499 => HttpError::BadRequest(body),
            _ => HttpError::ServerError { status, body },
        }
    }
}
