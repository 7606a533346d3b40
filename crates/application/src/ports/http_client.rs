//! HTTP Client port

use std::future::Future;

use riptide_domain::{RawResponse, RequestParams};

/// Port for issuing API requests.
///
/// This trait abstracts the HTTP transport, allowing the application
/// layer to be independent of specific HTTP libraries. Implementations
/// never fail at the type level: every transport failure is folded into
/// the returned [`RawResponse`]'s error field, where the normalization
/// pipeline classifies it.
pub trait HttpClient: Send + Sync {
    /// Issues a GET request for the given parameters.
    fn get(&self, params: &RequestParams) -> impl Future<Output = RawResponse> + Send;

    /// Issues a POST request for the given parameters.
    fn post(&self, params: &RequestParams) -> impl Future<Output = RawResponse> + Send;
}
