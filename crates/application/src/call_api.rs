//! Call API use case.
//!
//! Composes a transport implementation with the normalization pipeline:
//! one awaited transport call, one decode, one [`ApiResult`] out.

use std::sync::Arc;

use riptide_domain::{ApiError, ApiResult, RequestParams};

use crate::decode::{DecodeError, JsonObject, decode_many, decode_single};
use crate::ports::HttpClient;

/// Use case for issuing normalized API calls.
///
/// Every method resolves the transport call first and then feeds the
/// response through the matching decode entry point, so callers only
/// ever see an [`ApiResult`].
///
/// # Example
///
/// ```ignore
/// let client = Arc::new(ReqwestHttpClient::new(config)?);
/// let api = CallApi::new(client);
///
/// let user = api
///     .get_single(&RequestParams::new("/users/1"), decode_user)
///     .await;
/// ```
pub struct CallApi<C: HttpClient> {
    client: Arc<C>,
}

impl<C: HttpClient> CallApi<C> {
    /// Creates the use case over the given transport.
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// GETs a single-object payload and decodes it.
    pub async fn get_single<T, F>(
        &self,
        params: &RequestParams,
        on_data: F,
    ) -> ApiResult<T, ApiError>
    where
        F: FnOnce(JsonObject) -> Result<T, DecodeError>,
    {
        decode_single(self.client.get(params).await, on_data)
    }

    /// GETs a list-of-objects payload and decodes it.
    pub async fn get_many<T, F>(
        &self,
        params: &RequestParams,
        on_data: F,
    ) -> ApiResult<Vec<T>, ApiError>
    where
        F: FnOnce(Vec<JsonObject>) -> Result<Vec<T>, DecodeError>,
    {
        decode_many(self.client.get(params).await, on_data)
    }

    /// POSTs and decodes a single-object payload.
    pub async fn post_single<T, F>(
        &self,
        params: &RequestParams,
        on_data: F,
    ) -> ApiResult<T, ApiError>
    where
        F: FnOnce(JsonObject) -> Result<T, DecodeError>,
    {
        decode_single(self.client.post(params).await, on_data)
    }

    /// POSTs and decodes a list-of-objects payload.
    pub async fn post_many<T, F>(
        &self,
        params: &RequestParams,
        on_data: F,
    ) -> ApiResult<Vec<T>, ApiError>
    where
        F: FnOnce(Vec<JsonObject>) -> Result<Vec<T>, DecodeError>,
    {
        decode_many(self.client.post(params).await, on_data)
    }
}
