//! Request-side types for Webflow API calls.
//!
//! - [`RequestBody`]: an absent body or a JSON value
//! - [`RequestContext`]: cancellation and deadline for a single call
//! - [`default_headers`]: the header set sent when the caller supplies none

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::Serialize;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::clients::errors::{RequestConstructionError, TransportFailure, WebflowError};

/// API version sent in the `accept-version` header.
pub const ACCEPT_VERSION: &str = "1.0.0";

/// Name of the API version header.
pub const ACCEPT_VERSION_HEADER: &str = "accept-version";

/// A request payload.
///
/// Bodies are encoded when the `RequestBody` is built, so an unencodable
/// value is rejected before a request exists.
///
/// # Example
///
/// ```rust
/// use webflow_api::clients::RequestBody;
/// use serde_json::json;
///
/// let body = RequestBody::json(&json!({"domains": ["example.com"]})).unwrap();
/// assert!(body.is_present());
///
/// // `None` serializes to null, which is treated as no body.
/// let body = RequestBody::json(&None::<String>).unwrap();
/// assert_eq!(body, RequestBody::Absent);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
    /// No body; an empty payload is sent.
    #[default]
    Absent,
    /// A JSON document.
    Json(serde_json::Value),
}

impl RequestBody {
    /// Encodes `value` as a JSON body.
    ///
    /// A value that serializes to `null` becomes [`RequestBody::Absent`].
    ///
    /// # Errors
    ///
    /// Returns a local [`WebflowError`] whose message mentions an unsupported
    /// type when `value` cannot be represented as JSON (for example a map
    /// with non-string keys).
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, WebflowError> {
        match serde_json::to_value(value) {
            Ok(serde_json::Value::Null) => Ok(Self::Absent),
            Ok(json) => Ok(Self::Json(json)),
            Err(source) => Err(TransportFailure::BodyEncoding(source).into()),
        }
    }

    /// Returns `true` unless this is [`RequestBody::Absent`].
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    pub(crate) fn to_bytes(&self) -> Result<Vec<u8>, TransportFailure> {
        match self {
            Self::Absent => Ok(Vec::new()),
            Self::Json(json) => serde_json::to_vec(json).map_err(TransportFailure::BodyEncoding),
        }
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Absent,
            json => Self::Json(json),
        }
    }
}

/// Cancellation and deadline for a call.
///
/// [`RequestContext::background`] never cancels and has no deadline. The
/// deadline is absolute, so a context reused across calls shares one budget.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use tokio_util::sync::CancellationToken;
/// use webflow_api::clients::RequestContext;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let token = CancellationToken::new();
/// let ctx = RequestContext::background()
///     .with_timeout(Duration::from_secs(5))
///     .with_cancellation(token.clone());
///
/// assert!(!ctx.is_cancelled());
/// token.cancel();
/// assert!(ctx.is_cancelled());
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    deadline: Option<Instant>,
    cancellation: Option<CancellationToken>,
}

impl RequestContext {
    /// A context with no deadline that is never cancelled.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Sets the deadline to `timeout` from now.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Sets an absolute deadline. An earlier existing deadline is kept.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(self.deadline.map_or(deadline, |current| current.min(deadline)));
        self
    }

    /// Ties the context to `token`.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` once the cancellation token has fired.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// The error this context imposes right now, if any.
    pub(crate) fn check(&self) -> Result<(), TransportFailure> {
        if self.is_cancelled() {
            return Err(TransportFailure::Canceled);
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(TransportFailure::DeadlineExceeded);
        }
        Ok(())
    }

    /// Resolves when the context is cancelled; pends forever otherwise.
    pub(crate) async fn cancelled(&self) {
        match &self.cancellation {
            Some(token) => token.cancelled().await,
            None => std::future::pending().await,
        }
    }
}

/// Returns the headers sent when a call supplies none:
/// `Authorization`, `accept-version` and `Content-Type`.
///
/// # Errors
///
/// Fails if `api_key` contains characters not allowed in a header value.
pub fn default_headers(api_key: &str) -> Result<HeaderMap, WebflowError> {
    Ok(build_default_headers(api_key)?)
}

/// Resolves the header set for a call.
///
/// A non-empty `custom` map replaces the defaults; the bearer token is
/// injected on top of it either way.
pub(crate) fn resolve_headers(
    api_key: &str,
    custom: Option<&HeaderMap>,
) -> Result<HeaderMap, RequestConstructionError> {
    match custom.filter(|headers| !headers.is_empty()) {
        Some(custom) => {
            let mut headers = custom.clone();
            headers.insert(AUTHORIZATION, bearer(api_key)?);
            Ok(headers)
        }
        None => build_default_headers(api_key),
    }
}

fn build_default_headers(api_key: &str) -> Result<HeaderMap, RequestConstructionError> {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, bearer(api_key)?);
    headers.insert(ACCEPT_VERSION_HEADER, HeaderValue::from_static(ACCEPT_VERSION));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

fn bearer(api_key: &str) -> Result<HeaderValue, RequestConstructionError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
        RequestConstructionError::InvalidHeaderValue {
            name: "authorization",
        }
    })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Parses an HTTP method token. An empty string means `GET`.
pub(crate) fn parse_method(method: &str) -> Result<Method, RequestConstructionError> {
    if method.is_empty() {
        return Ok(Method::GET);
    }
    Method::from_bytes(method.as_bytes()).map_err(|_| RequestConstructionError::InvalidMethod {
        method: method.to_string(),
    })
}

/// Parses an absolute `http`/`https` URL.
pub(crate) fn parse_url(url: &str) -> Result<Url, RequestConstructionError> {
    let scheme_of = |raw: &str| raw.split_once(':').map_or("", |(scheme, _)| scheme).to_string();

    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(reason) => {
            let scheme = scheme_of(url);
            if !matches!(scheme.to_ascii_lowercase().as_str(), "http" | "https") {
                return Err(RequestConstructionError::UnsupportedScheme { scheme });
            }
            return Err(RequestConstructionError::InvalidUrl {
                url: url.to_string(),
                reason: reason.to_string(),
            });
        }
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(RequestConstructionError::UnsupportedScheme {
            scheme: parsed.scheme().to_string(),
        });
    }
    Ok(parsed)
}
