//! Outward request descriptor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for a single API request.
///
/// A plain record handed to the transport layer unmodified. Only the
/// path is required; header and body are attached as-is with no
/// validation here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParams {
    /// Request path, relative to the transport's base URL.
    pub path: String,
    /// Extra headers for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<HashMap<String, String>>,
    /// JSON body for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl RequestParams {
    /// Creates a descriptor for the given path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            header: None,
            body: None,
        }
    }

    /// Attaches headers to the request.
    #[must_use]
    pub fn with_header(mut self, header: HashMap<String, String>) -> Self {
        self.header = Some(header);
        self
    }

    /// Attaches a JSON body to the request.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}
