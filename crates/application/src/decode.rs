//! Response normalization pipeline.
//!
//! The single chokepoint where a loosely-typed [`RawResponse`] becomes
//! an [`ApiResult`]. Wire payloads are coerced into the canonical
//! object or list-of-objects shape, handed to a caller-supplied
//! decoder, and every failure along the way is classified into an
//! [`ApiError`]. Nothing downstream of this module branches on raw
//! shapes.

use riptide_domain::{ApiError, ApiResult, FormatError, RawResponse};
use serde_json::Value;
use thiserror::Error;

/// Canonical keyed-map shape handed to decoders.
pub type JsonObject = serde_json::Map<String, Value>;

/// Failure returned by a caller-supplied decoder.
///
/// A decoder that wants its own classification to survive normalization
/// returns [`DecodeError::Classified`]; it is passed through unchanged.
/// Anything else is wrapped into a processing error carrying the
/// response status.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// An already-classified error, forwarded as-is.
    #[error(transparent)]
    Classified(#[from] ApiError),

    /// A plain decoding failure, classified by the pipeline.
    #[error("{0}")]
    Invalid(String),
}

impl DecodeError {
    /// Creates a plain decoding failure.
    #[must_use]
    pub fn invalid(detail: impl Into<String>) -> Self {
        Self::Invalid(detail.into())
    }
}

/// Normalizes a response whose payload is a single object.
///
/// The pipeline, in order: a present transport error is classified and
/// returned (it wins over any payload); an absent payload becomes a
/// missing-data error; the payload is coerced to an object map
/// (accepting JSON text that parses to an object); the decoder runs.
/// Every failure path returns an [`ApiResult::Failure`]; this function
/// never propagates one.
pub fn decode_single<T, F>(response: RawResponse, on_data: F) -> ApiResult<T, ApiError>
where
    F: FnOnce(JsonObject) -> Result<T, DecodeError>,
{
    let status_code = response.status_code;
    let payload = match take_payload(response) {
        Ok(payload) => payload,
        Err(error) => return ApiResult::Failure(error),
    };

    match coerce_object(payload) {
        Ok(object) => classify_decoded(on_data(object), status_code),
        Err(error) => {
            tracing::warn!(%error, status_code, "payload is not a single object");
            ApiResult::Failure(ApiError::format(error, status_code))
        }
    }
}

/// Normalizes a response whose payload is an ordered list of objects.
///
/// Identical to [`decode_single`] except the payload must be an array
/// with every element an object (or JSON text parsing to one); a single
/// non-object element rejects the whole payload.
pub fn decode_many<T, F>(response: RawResponse, on_data: F) -> ApiResult<Vec<T>, ApiError>
where
    F: FnOnce(Vec<JsonObject>) -> Result<Vec<T>, DecodeError>,
{
    let status_code = response.status_code;
    let payload = match take_payload(response) {
        Ok(payload) => payload,
        Err(error) => return ApiResult::Failure(error),
    };

    match coerce_object_list(payload) {
        Ok(objects) => classify_decoded(on_data(objects), status_code),
        Err(error) => {
            tracing::warn!(%error, status_code, "payload is not a list of objects");
            ApiResult::Failure(ApiError::format(error, status_code))
        }
    }
}

/// Applies the error-over-data precedence and missing-data rules.
fn take_payload(response: RawResponse) -> Result<Value, ApiError> {
    if let Some(error) = response.error {
        tracing::warn!(%error, status_code = response.status_code, "transport error");
        return Err(ApiError::from_transport(error));
    }

    response.data.ok_or_else(|| {
        tracing::warn!(
            status_code = response.status_code,
            "response resolved without data"
        );
        ApiError::missing_data(response.status_code)
    })
}

/// Folds a decoder outcome into the result algebra.
fn classify_decoded<T>(
    decoded: Result<T, DecodeError>,
    status_code: Option<u16>,
) -> ApiResult<T, ApiError> {
    match decoded {
        Ok(value) => ApiResult::Success(value),
        Err(DecodeError::Classified(error)) => {
            tracing::warn!(%error, "decoder rejected payload");
            ApiResult::Failure(error)
        }
        Err(DecodeError::Invalid(detail)) => {
            tracing::warn!(%detail, status_code, "decoding failed");
            ApiResult::Failure(ApiError::processing(detail, status_code))
        }
    }
}

/// Coerces a wire value into an object map.
fn coerce_object(value: Value) -> Result<JsonObject, FormatError> {
    match value {
        Value::Object(object) => Ok(object),
        Value::String(text) => match serde_json::from_str::<Value>(&text)? {
            Value::Object(object) => Ok(object),
            other => Err(unexpected_shape("an object", &other)),
        },
        other => Err(unexpected_shape("an object", &other)),
    }
}

/// Coerces a wire value into a homogeneous list of object maps.
fn coerce_object_list(value: Value) -> Result<Vec<JsonObject>, FormatError> {
    match value {
        Value::Array(items) => collect_objects(items),
        Value::String(text) => match serde_json::from_str::<Value>(&text)? {
            Value::Array(items) => collect_objects(items),
            other => Err(unexpected_shape("an array of objects", &other)),
        },
        other => Err(unexpected_shape("an array of objects", &other)),
    }
}

fn collect_objects(items: Vec<Value>) -> Result<Vec<JsonObject>, FormatError> {
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(object) => Ok(object),
            other => Err(unexpected_shape("an object element", &other)),
        })
        .collect()
}

const fn unexpected_shape(expected: &'static str, found: &Value) -> FormatError {
    FormatError::UnexpectedShape {
        expected,
        found: shape_name(found),
    }
}

/// Names a wire value's shape for diagnostics.
const fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
