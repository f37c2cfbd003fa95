//! The [`Transport`] seam between resource accessors and the network.

use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::clients::errors::{TransportFailure, WebflowError};
use crate::clients::http_request::{RequestBody, RequestContext};

/// An authenticated call primitive.
///
/// Implementations build a request from `method`, `url`, `api_key`,
/// `headers` and `body`, dispatch it, and return the decoded JSON of a 2xx
/// response. Any failure is returned as a [`WebflowError`].
///
/// `headers` of `None` (or an empty map) means the default header set; a
/// non-empty map replaces it.
///
/// [`HttpTransport`](crate::clients::HttpTransport) is the production
/// implementation; [`MockTransport`](crate::clients::MockTransport) is an
/// in-process double.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Performs one call.
    ///
    /// # Errors
    ///
    /// Returns a local error for construction, encoding, network, read and
    /// decode failures, or the upstream error payload for a non-2xx response.
    async fn call(
        &self,
        ctx: &RequestContext,
        method: &str,
        url: &str,
        api_key: &str,
        headers: Option<&HeaderMap>,
        body: RequestBody,
    ) -> Result<serde_json::Value, WebflowError>;
}

/// Performs a call through `transport` and decodes the result into `T`.
///
/// # Errors
///
/// Propagates the transport's error unchanged, or returns a local error if
/// the response does not match `T`.
pub async fn call_json<T: DeserializeOwned>(
    transport: &dyn Transport,
    ctx: &RequestContext,
    method: &str,
    url: &str,
    api_key: &str,
    headers: Option<&HeaderMap>,
    body: RequestBody,
) -> Result<T, WebflowError> {
    let value = transport
        .call(ctx, method, url, api_key, headers, body)
        .await?;
    serde_json::from_value(value).map_err(|source| TransportFailure::ResponseDecode(source).into())
}
