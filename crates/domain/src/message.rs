//! User-facing message record and its wire form.

use serde_json::{Value, json};

/// A displayable outcome message attached to an API error or response.
///
/// On the wire the details field is keyed `content`; older backends
/// used `message`, which [`HttpMessage::from_json`] still accepts. The
/// explicit conversions below are the only wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpMessage {
    /// Whether the originating operation succeeded.
    pub success: bool,
    /// Short display title.
    pub title: String,
    /// Full display text.
    pub details: String,
}

impl HttpMessage {
    /// Creates a new message.
    #[must_use]
    pub fn new(success: bool, title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            success,
            title: title.into(),
            details: details.into(),
        }
    }

    /// Creates a failure message with the default title.
    #[must_use]
    pub fn error(details: impl Into<String>) -> Self {
        Self::new(false, "Error", details)
    }

    /// Builds a message from its wire form.
    ///
    /// Absent or mistyped keys fall back to defaults: `success` to
    /// false, `title` to "Error", and the details text to `content`,
    /// then `message`, then "Unknown error".
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let success = value
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let title = value
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("Error")
            .to_string();
        let details = value
            .get("content")
            .or_else(|| value.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string();

        Self {
            success,
            title,
            details,
        }
    }

    /// Renders the message into its wire form.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "success": self.success,
            "title": self.title,
            "content": self.details,
        })
    }
}
