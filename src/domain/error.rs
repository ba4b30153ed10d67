//! Error types for the popcorn plugin.
//!
//! This module defines two error types:
//!
//! - [`PopcornError`]: failures of plugin operations (configuration, themes,
//!   watchlist rules, decoding) with a [`Result`] alias.
//! - [`FetchError`]: the outcome of a remote API request that did not produce
//!   data. Fetch errors are mapped to a single user-visible banner by the
//!   controllers and logged with full detail.
//!
//! Both are implemented with `thiserror`.

use thiserror::Error;

/// The main error type for popcorn operations.
///
/// # Examples
///
/// ```
/// use popcorn::domain::PopcornError;
///
/// fn require_key(key: Option<&str>) -> Result<&str, PopcornError> {
///     key.ok_or_else(|| PopcornError::Config("api_key is not set".to_string()))
/// }
///
/// assert!(require_key(None).is_err());
/// ```
#[derive(Debug, Error)]
pub enum PopcornError {
    /// Configuration is invalid or missing.
    ///
    /// Raised when a required plugin option (such as `api_key`) is absent at
    /// the moment it is needed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON payload could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A user rating outside `1..=10` was supplied.
    #[error("Rating {0} is out of range (expected 1-10)")]
    InvalidRating(u8),

    /// The watchlist already holds a record with this id.
    #[error("Movie {0} is already in the watched list")]
    AlreadyWatched(String),
}

/// A specialized `Result` type for popcorn operations.
pub type Result<T> = std::result::Result<T, PopcornError>;

/// Why a remote API request produced no usable data.
///
/// Cancellation is deliberately not a variant: a superseded request is
/// detected by its stale token and never reaches error handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The service answered with a non-success HTTP status.
    #[error("request failed with HTTP status {status}")]
    Http {
        /// Status code returned by the service.
        status: u16,
    },

    /// The request never completed (DNS, TLS, connection reset, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not the JSON shape the service documents.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The service responded well-formed but reported no match.
    #[error("not found: {message}")]
    NotFound {
        /// Message supplied by the service (e.g. `"Movie not found!"`).
        message: String,
    },

    /// The request could not be built (e.g. missing API key).
    #[error("request not sent: {0}")]
    NotSent(String),
}

impl FetchError {
    /// Returns `true` when the service itself reported that nothing matched.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinguished_from_request_failures() {
        let not_found = FetchError::NotFound {
            message: "Movie not found!".to_string(),
        };
        assert!(not_found.is_not_found());
        assert!(!FetchError::Http { status: 503 }.is_not_found());
        assert!(!FetchError::Transport("reset".to_string()).is_not_found());
    }

    #[test]
    fn messages_carry_detail_for_logs() {
        assert_eq!(
            FetchError::Http { status: 401 }.to_string(),
            "request failed with HTTP status 401"
        );
        assert_eq!(
            PopcornError::InvalidRating(11).to_string(),
            "Rating 11 is out of range (expected 1-10)"
        );
    }
}
