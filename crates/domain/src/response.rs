//! Raw transport response and the transport-error taxonomy.

use serde_json::Value;
use thiserror::Error;

/// Errors reported by the HTTP transport layer.
///
/// Produced by the transport adapter and classified into an
/// [`crate::ApiError`] at the normalization boundary; never surfaced to
/// callers directly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request exceeded its timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout that was exceeded, in milliseconds.
        timeout_ms: u64,
    },

    /// DNS resolution failed for the target host.
    #[error("DNS resolution failed for {host}: {message}")]
    Dns {
        /// Host that could not be resolved.
        host: String,
        /// Resolver error text.
        message: String,
    },

    /// The target host actively refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Host that refused the connection.
        host: String,
        /// Port the connection was attempted on.
        port: u16,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The redirect limit was exceeded.
    #[error("too many redirects (max: {max})")]
    TooManyRedirects {
        /// Redirect limit that was exceeded.
        max: usize,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {code}: {reason}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// The status reason phrase or error body excerpt.
        reason: String,
    },

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Returns the HTTP status code, for status errors.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// The resolved, still-untyped outcome of a transport call.
///
/// Exactly what came back from the wire: an optional payload, an
/// optional transport error, and the HTTP status if one was received.
/// Consumed once by the normalization pipeline; a present `error`
/// always wins over `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Decoded wire payload: an object, an array, a string, or absent.
    pub data: Option<Value>,
    /// Transport failure, if the call did not resolve cleanly.
    pub error: Option<TransportError>,
    /// HTTP status code, if a response was received.
    pub status_code: Option<u16>,
}

impl RawResponse {
    /// Creates a response carrying a payload.
    #[must_use]
    pub const fn with_data(data: Value, status_code: Option<u16>) -> Self {
        Self {
            data: Some(data),
            error: None,
            status_code,
        }
    }

    /// Creates a response carrying a transport error.
    #[must_use]
    pub const fn with_error(error: TransportError, status_code: Option<u16>) -> Self {
        Self {
            data: None,
            error: Some(error),
            status_code,
        }
    }

    /// Creates a response that resolved without payload or error.
    #[must_use]
    pub const fn empty(status_code: Option<u16>) -> Self {
        Self {
            data: None,
            error: None,
            status_code,
        }
    }
}
