//! Default [`Transport`] backed by `reqwest`.

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::clients::errors::{TransportFailure, WebflowError};
use crate::clients::http_request::{
    parse_method, parse_url, resolve_headers, RequestBody, RequestContext,
};
use crate::clients::transport::Transport;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for the Webflow API.
///
/// One call is one request: no retries, no caching. Connection pooling is
/// whatever the wrapped `reqwest::Client` provides. Cloning is cheap and
/// clones share the pool.
///
/// # Thread Safety
///
/// `HttpTransport` is `Send + Sync`; concurrent calls do not interfere.
///
/// # Example
///
/// ```rust,ignore
/// use webflow_api::clients::{HttpTransport, RequestBody, RequestContext, Transport};
///
/// let transport = HttpTransport::new();
/// let info = transport
///     .call(
///         &RequestContext::background(),
///         "GET",
///         "https://api.webflow.com/info",
///         "my-api-token",
///         None,
///         RequestBody::Absent,
///     )
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

// Verify HttpTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpTransport>();
};

impl HttpTransport {
    /// Creates a transport with a rustls `reqwest::Client` and the SDK
    /// `User-Agent`.
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(format!("webflow-api-rust v{SDK_VERSION}"))
            .build()
            .unwrap_or_else(|error| {
                tracing::warn!(%error, "falling back to a default HTTP client");
                reqwest::Client::new()
            });
        Self { client }
    }

    /// Wraps an existing client, e.g. one with custom timeouts or a proxy.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build_request(
        method: &str,
        url: &str,
        api_key: &str,
        headers: Option<&HeaderMap>,
        body: &RequestBody,
    ) -> Result<reqwest::Request, TransportFailure> {
        let payload = body.to_bytes()?;
        let method = parse_method(method)?;
        let url = parse_url(url)?;
        let headers = resolve_headers(api_key, headers)?;

        let mut request = reqwest::Request::new(method, url);
        *request.headers_mut() = headers;
        if !payload.is_empty() {
            *request.body_mut() = Some(payload.into());
        }
        Ok(request)
    }

    async fn execute(
        &self,
        ctx: &RequestContext,
        request: reqwest::Request,
    ) -> Result<(u16, Vec<u8>), TransportFailure> {
        ctx.check()?;

        let exchange = async {
            let response = self
                .client
                .execute(request)
                .await
                .map_err(TransportFailure::Network)?;
            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(TransportFailure::ResponseRead)?;
            Ok::<_, TransportFailure>((status, body.to_vec()))
        };

        let guarded = async {
            tokio::select! {
                biased;
                () = ctx.cancelled() => Err(TransportFailure::Canceled),
                result = exchange => result,
            }
        };

        match ctx.deadline() {
            Some(deadline) => tokio::time::timeout_at(deadline, guarded)
                .await
                .unwrap_or(Err(TransportFailure::DeadlineExceeded)),
            None => guarded.await,
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(
        &self,
        ctx: &RequestContext,
        method: &str,
        url: &str,
        api_key: &str,
        headers: Option<&HeaderMap>,
        body: RequestBody,
    ) -> Result<serde_json::Value, WebflowError> {
        let request = Self::build_request(method, url, api_key, headers, &body)?;

        tracing::debug!(method = %request.method(), url = %request.url(), "sending Webflow API request");
        let (status, payload) = self.execute(ctx, request).await?;
        tracing::debug!(status, bytes = payload.len(), "received Webflow API response");

        decode_response(status, &payload)
    }
}

/// Maps a status and raw body to the call result.
fn decode_response(status: u16, payload: &[u8]) -> Result<serde_json::Value, WebflowError> {
    if !(200..=299).contains(&status) {
        return Err(WebflowError::from_upstream(status, payload));
    }
    serde_json::from_slice(payload).map_err(|source| TransportFailure::ResponseDecode(source).into())
}
