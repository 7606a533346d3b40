//! Classified API error type.
//!
//! Every failure surfaced by the normalization pipeline is an
//! [`ApiError`]: one uniform type, distinguished by the cause recorded
//! at classification time rather than by distinct error types.

use std::backtrace::Backtrace;
use std::fmt;

use thiserror::Error;

use crate::message::HttpMessage;
use crate::response::TransportError;

/// How a payload failed to match the shape a decoder expects.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The payload was JSON text that did not parse.
    #[error("malformed JSON text: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload parsed but has the wrong shape.
    #[error("expected {expected}, found {found}")]
    UnexpectedShape {
        /// Shape the decoder expected.
        expected: &'static str,
        /// Shape actually present on the wire.
        found: &'static str,
    },
}

/// Provenance of a classified error.
#[derive(Debug, Error)]
pub enum ErrorCause {
    /// Classified from a lower-level transport failure.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response resolved without a transport error but carried no
    /// payload.
    #[error("response contained no data")]
    MissingData,

    /// The payload could not be coerced to the expected shape.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Coercion or decoding failed for any other reason.
    #[error("data processing error: {0}")]
    Processing(String),
}

/// The uniform error carried by every normalized failure.
///
/// Wraps the originating cause together with an optional user-facing
/// message, the HTTP status code when one was received, and a
/// diagnostic backtrace captured at classification time. The trace is
/// kept for logging only; no behavior depends on it.
#[derive(Debug)]
pub struct ApiError {
    cause: ErrorCause,
    message: Option<HttpMessage>,
    status_code: Option<u16>,
    trace: Backtrace,
}

impl ApiError {
    /// Classifies a transport failure.
    ///
    /// Derives a displayable [`HttpMessage`] from the error variant and
    /// preserves the HTTP status when the failure carries one.
    #[must_use]
    pub fn from_transport(error: TransportError) -> Self {
        let message = HttpMessage::new(false, Self::transport_title(&error), error.to_string());
        Self {
            status_code: error.status_code(),
            message: Some(message),
            cause: ErrorCause::Transport(error),
            trace: Backtrace::capture(),
        }
    }

    /// Synthesizes the error for a response that resolved without a
    /// payload.
    #[must_use]
    pub fn missing_data(status_code: Option<u16>) -> Self {
        Self {
            cause: ErrorCause::MissingData,
            message: None,
            status_code,
            trace: Backtrace::capture(),
        }
    }

    /// Synthesizes the error for a payload of the wrong shape.
    #[must_use]
    pub fn format(error: FormatError, status_code: Option<u16>) -> Self {
        Self {
            cause: ErrorCause::Format(error),
            message: None,
            status_code,
            trace: Backtrace::capture(),
        }
    }

    /// Synthesizes the error for a decoding failure that is not a
    /// shape mismatch.
    #[must_use]
    pub fn processing(detail: impl Into<String>, status_code: Option<u16>) -> Self {
        Self {
            cause: ErrorCause::Processing(detail.into()),
            message: None,
            status_code,
            trace: Backtrace::capture(),
        }
    }

    /// Attaches a user-facing message.
    #[must_use]
    pub fn with_message(mut self, message: HttpMessage) -> Self {
        self.message = Some(message);
        self
    }

    /// Returns the recorded cause.
    #[must_use]
    pub const fn cause(&self) -> &ErrorCause {
        &self.cause
    }

    /// Returns the user-facing message, if one was attached.
    #[must_use]
    pub const fn message(&self) -> Option<&HttpMessage> {
        self.message.as_ref()
    }

    /// Returns the HTTP status code, if one was received.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Returns the backtrace captured at classification time.
    #[must_use]
    pub const fn trace(&self) -> &Backtrace {
        &self.trace
    }

    fn transport_title(error: &TransportError) -> &'static str {
        match error {
            TransportError::Timeout { .. } => "Timeout",
            TransportError::Dns { .. }
            | TransportError::ConnectionRefused { .. }
            | TransportError::ConnectionFailed(_) => "Connection Error",
            TransportError::InvalidUrl(_) => "Invalid URL",
            TransportError::TooManyRedirects { .. } => "Too Many Redirects",
            TransportError::Status { .. } => "Server Error",
            TransportError::Other(_) => "Request Failed",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "{} (HTTP {code})", self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_transport_preserves_status_and_attaches_message() {
        let error = ApiError::from_transport(TransportError::Status {
            code: 502,
            reason: "Bad Gateway".into(),
        });

        assert_eq!(error.status_code(), Some(502));
        let message = error.message().unwrap();
        assert!(!message.success);
        assert_eq!(message.title, "Server Error");
        assert!(message.details.contains("502"));
        assert!(matches!(error.cause(), ErrorCause::Transport(_)));
    }

    #[test]
    fn test_from_transport_titles_by_category() {
        let timeout = ApiError::from_transport(TransportError::Timeout { timeout_ms: 30_000 });
        assert_eq!(timeout.message().unwrap().title, "Timeout");

        let refused = ApiError::from_transport(TransportError::ConnectionRefused {
            host: "api.example.com".into(),
            port: 443,
        });
        assert_eq!(refused.message().unwrap().title, "Connection Error");
    }

    #[test]
    fn test_missing_data_keeps_status() {
        let error = ApiError::missing_data(Some(204));
        assert_eq!(error.status_code(), Some(204));
        assert!(matches!(error.cause(), ErrorCause::MissingData));
        assert_eq!(error.message(), None);
    }

    #[test]
    fn test_processing_records_detail() {
        let error = ApiError::processing("missing field `id`", Some(200));
        assert!(error.to_string().contains("missing field `id`"));
        assert!(matches!(error.cause(), ErrorCause::Processing(_)));
    }

    #[test]
    fn test_source_chain_reaches_transport_error() {
        use std::error::Error as _;

        let error = ApiError::from_transport(TransportError::ConnectionFailed("reset".into()));
        let cause = error.source().unwrap();
        let transport = cause.source().unwrap();
        assert!(transport.to_string().contains("reset"));
    }

    #[test]
    fn test_with_message_overrides() {
        let error = ApiError::missing_data(None)
            .with_message(HttpMessage::error("Nothing to show"));
        assert_eq!(error.message().unwrap().details, "Nothing to show");
    }
}
