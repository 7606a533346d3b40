//! End-to-end normalization tests: a stub transport feeding `CallApi`.

#![allow(clippy::unwrap_used)]

use std::future::Future;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use riptide_application::{CallApi, DecodeError, HttpClient, JsonObject};
use riptide_domain::{
    ApiResult, ErrorCause, RawResponse, RequestParams, TransportError,
};
use serde_json::{Value, json};

/// Transport stub replaying a canned response and recording calls.
struct StubTransport {
    response: RawResponse,
    calls: Mutex<Vec<String>>,
}

impl StubTransport {
    fn new(response: RawResponse) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn record(&self, verb: &str, params: &RequestParams) -> RawResponse {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{verb} {}", params.path));
        self.response.clone()
    }
}

impl HttpClient for StubTransport {
    fn get(&self, params: &RequestParams) -> impl Future<Output = RawResponse> + Send {
        let response = self.record("GET", params);
        async move { response }
    }

    fn post(&self, params: &RequestParams) -> impl Future<Output = RawResponse> + Send {
        let response = self.record("POST", params);
        async move { response }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn decode_name(object: JsonObject) -> Result<String, DecodeError> {
    object
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| DecodeError::invalid("missing field `name`"))
}

#[tokio::test]
async fn test_get_single_decodes_object_payload() {
    init_tracing();
    let transport = StubTransport::new(RawResponse::with_data(
        json!({"name": "Ada"}),
        Some(200),
    ));
    let api = CallApi::new(Arc::clone(&transport));

    let result = api
        .get_single(&RequestParams::new("/users/1"), decode_name)
        .await;

    assert_eq!(result.success_value(), Some("Ada".to_string()));
    assert_eq!(*transport.calls.lock().unwrap(), ["GET /users/1"]);
}

#[tokio::test]
async fn test_post_single_decodes_json_text_payload() {
    init_tracing();
    let transport = StubTransport::new(RawResponse::with_data(
        json!(r#"{"name":"Ada"}"#),
        Some(201),
    ));
    let api = CallApi::new(Arc::clone(&transport));

    let params = RequestParams::new("/users").with_body(json!({"name": "Ada"}));
    let result = api.post_single(&params, decode_name).await;

    assert_eq!(result.success_value(), Some("Ada".to_string()));
    assert_eq!(*transport.calls.lock().unwrap(), ["POST /users"]);
}

#[tokio::test]
async fn test_get_many_decodes_each_element() {
    init_tracing();
    let transport = StubTransport::new(RawResponse::with_data(
        json!([{"id": "1"}, {"id": "2"}]),
        Some(200),
    ));
    let api = CallApi::new(transport);

    let result = api
        .get_many(&RequestParams::new("/users"), |objects| {
            objects
                .iter()
                .map(|object| {
                    object
                        .get("id")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .ok_or_else(|| DecodeError::invalid("missing field `id`"))
                })
                .collect()
        })
        .await;

    assert_eq!(
        result.success_value(),
        Some(vec!["1".to_string(), "2".to_string()])
    );
}

#[tokio::test]
async fn test_transport_failure_surfaces_as_classified_error() {
    init_tracing();
    let transport = StubTransport::new(RawResponse::with_error(
        TransportError::Timeout { timeout_ms: 30_000 },
        None,
    ));
    let api = CallApi::new(transport);

    let result = api
        .get_single(&RequestParams::new("/users/1"), decode_name)
        .await;

    let display = result.when(
        |name| format!("hello {name}"),
        |error| error.message().map_or_else(
            || "something went wrong".to_string(),
            |message| message.title.clone(),
        ),
    );
    assert_eq!(display, "Timeout");
}

#[tokio::test]
async fn test_dependent_call_runs_only_after_success() {
    init_tracing();
    let first = StubTransport::new(RawResponse::with_data(json!({"name": "Ada"}), Some(200)));
    let second = StubTransport::new(RawResponse::with_data(
        json!({"name": "Ada", "role": "admin"}),
        Some(200),
    ));
    let profile_api = CallApi::new(Arc::clone(&second));

    let user = CallApi::new(first)
        .get_single(&RequestParams::new("/users/1"), decode_name)
        .await;

    let role = match user {
        ApiResult::Success(name) => {
            profile_api
                .get_single(&RequestParams::new(format!("/profiles/{name}")), |object| {
                    object
                        .get("role")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .ok_or_else(|| DecodeError::invalid("missing field `role`"))
                })
                .await
        }
        ApiResult::Failure(error) => ApiResult::Failure(error),
    };

    assert_eq!(role.success_value(), Some("admin".to_string()));
    assert_eq!(*second.calls.lock().unwrap(), ["GET /profiles/Ada"]);
}

#[tokio::test]
async fn test_missing_payload_is_classified_not_panicked() {
    init_tracing();
    let transport = StubTransport::new(RawResponse::empty(Some(500)));
    let api = CallApi::new(transport);

    let result = api
        .get_single(&RequestParams::new("/users/1"), decode_name)
        .await;

    let error = result.failure_value().unwrap();
    assert!(matches!(error.cause(), ErrorCause::MissingData));
    assert_eq!(error.status_code(), Some(500));
}
