//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest
//! library. It never returns an error at the type level: every failure
//! is folded into the [`RawResponse`] it resolves to, where the
//! normalization pipeline classifies it.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use riptide_application::ports::HttpClient;
use riptide_domain::{RawResponse, RequestParams, TransportError};
use serde_json::Value;
use url::Url;

/// Settings for the reqwest transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all request paths are resolved against.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User-Agent header value.
    pub user_agent: String,
    /// Maximum number of redirects to follow.
    pub max_redirects: usize,
}

impl ClientConfig {
    /// Creates a configuration with default settings for the given
    /// base URL: 30 second timeout, up to 10 redirects.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: 30_000,
            user_agent: format!("Riptide/{}", env!("CARGO_PKG_VERSION")),
            max_redirects: 10,
        }
    }
}

/// HTTP transport implementation using reqwest.
///
/// This is the primary transport adapter for Riptide. It wraps
/// `reqwest::Client` and implements the `HttpClient` port from the
/// application layer.
pub struct ReqwestHttpClient {
    client: Client,
    base_url: Url,
    timeout_ms: u64,
    max_redirects: usize,
}

impl ReqwestHttpClient {
    /// Creates a new transport from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is malformed or the underlying
    /// client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {}", config.base_url)))?;

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout_ms: config.timeout_ms,
            max_redirects: config.max_redirects,
        })
    }

    /// Creates a transport over a custom reqwest client, with default
    /// timeout and redirect settings.
    #[must_use]
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self {
            client,
            base_url,
            timeout_ms: 30_000,
            max_redirects: 10,
        }
    }

    /// Resolves a request path against the base URL.
    fn join_url(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {path}")))
    }

    /// Executes one request and folds the outcome into a `RawResponse`.
    async fn execute(&self, method: Method, params: &RequestParams) -> RawResponse {
        let url = match self.join_url(&params.path) {
            Ok(url) => url,
            Err(error) => return RawResponse::with_error(error, None),
        };

        let mut builder = self
            .client
            .request(method, url)
            .timeout(Duration::from_millis(self.timeout_ms));

        if let Some(header) = &params.header {
            for (name, value) in header {
                builder = builder.header(name, value);
            }
        }

        if let Some(body) = &params.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(error) => {
                let error = self.map_error(error);
                tracing::warn!(%error, path = %params.path, "request did not resolve");
                return RawResponse::with_error(error, None);
            }
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(error) => {
                return RawResponse::with_error(
                    TransportError::Other(format!("failed to read body: {error}")),
                    Some(status.as_u16()),
                );
            }
        };

        let data = parse_wire_value(&bytes);
        if status.is_success() {
            match data {
                Some(value) => RawResponse::with_data(value, Some(status.as_u16())),
                None => RawResponse::empty(Some(status.as_u16())),
            }
        } else {
            tracing::warn!(status = status.as_u16(), path = %params.path, "error status");
            // A present error outranks data during normalization; the
            // body stays available for diagnostics.
            RawResponse {
                data,
                error: Some(status_error(status)),
                status_code: Some(status.as_u16()),
            }
        }
    }

    /// Maps reqwest errors to the transport-error taxonomy.
    fn map_error(&self, error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                timeout_ms: self.timeout_ms,
            };
        }

        if error.is_connect() {
            let message = error.to_string();
            let host = error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string();
            if message.to_lowercase().contains("dns") || message.to_lowercase().contains("resolve")
            {
                return TransportError::Dns { host, message };
            }
            if message.to_lowercase().contains("refused") {
                return TransportError::ConnectionRefused {
                    host,
                    port: error.url().and_then(Url::port).unwrap_or(80),
                };
            }
            return TransportError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return TransportError::TooManyRedirects {
                max: self.max_redirects,
            };
        }

        TransportError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, params: &RequestParams) -> impl Future<Output = RawResponse> + Send {
        self.execute(Method::GET, params)
    }

    fn post(&self, params: &RequestParams) -> impl Future<Output = RawResponse> + Send {
        self.execute(Method::POST, params)
    }
}

/// Converts a non-success status into its transport error.
fn status_error(status: StatusCode) -> TransportError {
    TransportError::Status {
        code: status.as_u16(),
        reason: status
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string(),
    }
}

/// Decodes a response body into a wire value.
///
/// JSON bodies parse to their structured form; anything else is kept
/// as a string wire value for the coercion step to inspect. An empty
/// body is no payload at all.
fn parse_wire_value(bytes: &[u8]) -> Option<Value> {
    if bytes.is_empty() {
        return None;
    }
    serde_json::from_slice(bytes)
        .ok()
        .or_else(|| Some(Value::String(String::from_utf8_lossy(bytes).into_owned())))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("https://api.example.com");
        assert_eq!(config.timeout_ms, 30_000);
        assert_eq!(config.max_redirects, 10);
        assert!(config.user_agent.starts_with("Riptide/"));
    }

    #[test]
    fn test_client_creation() {
        let client = ReqwestHttpClient::new(ClientConfig::new("https://api.example.com"));
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = ReqwestHttpClient::new(ClientConfig::new("not a url"));
        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }

    #[test]
    fn test_join_url_resolves_relative_and_absolute_paths() {
        let client = ReqwestHttpClient::new(ClientConfig::new("https://api.example.com/v1/"))
            .unwrap();

        assert_eq!(
            client.join_url("users").unwrap().as_str(),
            "https://api.example.com/v1/users"
        );
        // A leading slash resolves from the host root.
        assert_eq!(
            client.join_url("/users").unwrap().as_str(),
            "https://api.example.com/users"
        );
    }

    #[test]
    fn test_parse_wire_value_shapes() {
        assert_eq!(
            parse_wire_value(br#"{"id":"1"}"#),
            Some(json!({"id": "1"}))
        );
        assert_eq!(parse_wire_value(b"[1,2]"), Some(json!([1, 2])));
        assert_eq!(
            parse_wire_value(b"plain text"),
            Some(Value::String("plain text".into()))
        );
        assert_eq!(parse_wire_value(b""), None);
    }

    #[test]
    fn test_status_error_carries_code_and_reason() {
        let error = status_error(StatusCode::BAD_GATEWAY);
        assert_eq!(
            error,
            TransportError::Status {
                code: 502,
                reason: "Bad Gateway".into(),
            }
        );
    }
}
