//! Error types for Webflow API calls.
//!
//! Every fallible call returns a single error type, [`WebflowError`]. It covers
//! two origins:
//!
//! - **Upstream**: the API answered with a non-2xx status and a well-formed
//!   error body. `code` is the HTTP status and `err`/`message`/`problems`
//!   carry whatever the API sent.
//! - **Local**: the call failed before, during or after I/O (bad method or
//!   URL, unencodable body, network failure, unreadable or undecodable
//!   response). `code` is the reserved value [`LOCAL_ERROR_CODE`] (418) and
//!   `err` is [`LOCAL_ERROR_TAG`].
//!
//! Prefer [`WebflowError::origin`] over comparing `code` against 418.
//!
//! # Example
//!
//! ```rust,ignore
//! use webflow_api::{ErrorOrigin, Webflow};
//!
//! let webflow = Webflow::new("my-api-token");
//! match webflow.meta().get_info().await {
//!     Ok(info) => println!("rate limit: {}", info.rate_limit),
//!     Err(e) if e.origin == ErrorOrigin::Local => println!("local failure: {}", e.message),
//!     Err(e) => println!("API error {}: {}", e.code, e.err),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status code reported for local failures. Not a real upstream status.
pub const LOCAL_ERROR_CODE: u16 = 418;

/// `err` tag reported for local failures.
pub const LOCAL_ERROR_TAG: &str = "LOCAL_ERROR";

/// Where a [`WebflowError`] came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorOrigin {
    /// Request construction, encoding, network I/O or response decoding.
    Local,
    /// A structured error payload returned by the API.
    #[default]
    Upstream,
}

/// The error returned by every Webflow API operation.
///
/// The serde shape mirrors the API's error payload (`code`, `msg`, `err`,
/// `name`, `path`, `problems`). `origin` and `upstream_status` are not part of
/// the wire format.
#[derive(Clone, Debug, Error, PartialEq, Serialize, Deserialize)]
#[error("{err} ({code}): {message}")]
pub struct WebflowError {
    /// HTTP status for upstream errors, [`LOCAL_ERROR_CODE`] for local ones.
    #[serde(default)]
    pub code: u16,

    /// Human-readable message.
    #[serde(default, rename = "msg")]
    pub message: String,

    /// Error tag, e.g. `"ValidationError"` or [`LOCAL_ERROR_TAG`].
    #[serde(default)]
    pub err: String,

    /// Upstream error name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Upstream request path the error refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Upstream validation problems, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problems: Option<serde_json::Value>,

    /// Local or upstream.
    #[serde(skip)]
    pub origin: ErrorOrigin,

    /// The real HTTP status when a non-2xx response could not be decoded
    /// into an error payload. `code` is 418 in that case.
    #[serde(skip)]
    pub upstream_status: Option<u16>,
}

impl WebflowError {
    /// Builds a local error carrying `message`.
    #[must_use]
    pub fn from_local(message: impl Into<String>) -> Self {
        Self {
            code: LOCAL_ERROR_CODE,
            message: message.into(),
            err: LOCAL_ERROR_TAG.to_string(),
            name: None,
            path: None,
            problems: None,
            origin: ErrorOrigin::Local,
            upstream_status: None,
        }
    }

    /// Builds an error from a non-2xx response.
    ///
    /// `raw_body` is decoded as an error payload and `code` is overwritten
    /// with `status`. If the body does not decode, the result is a local
    /// error describing the decode failure, with `status` kept in
    /// [`upstream_status`](Self::upstream_status).
    #[must_use]
    pub fn from_upstream(status: u16, raw_body: &[u8]) -> Self {
        match serde_json::from_slice::<Self>(raw_body) {
            Ok(mut error) => {
                error.code = status;
                error.origin = ErrorOrigin::Upstream;
                error
            }
            Err(source) => {
                tracing::warn!(status, error = %source, "could not decode Webflow error response");
                TransportFailure::ErrorResponseDecode { status, source }.into()
            }
        }
    }

    /// Returns `true` for failures that never reached, or never came back
    /// from, the API in a structured form.
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.origin == ErrorOrigin::Local
    }

    /// Returns `true` for structured errors reported by the API.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        self.origin == ErrorOrigin::Upstream
    }
}

/// Reasons a request could not be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum RequestConstructionError {
    #[error("invalid method {method:?}")]
    InvalidMethod { method: String },

    #[error("unsupported protocol scheme {scheme:?}")]
    UnsupportedScheme { scheme: String },

    #[error("parse {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid value for header {name:?}")]
    InvalidHeaderValue { name: &'static str },
}

/// Local failure taxonomy of the transport.
///
/// Never exposed directly; each failure becomes a local [`WebflowError`]
/// whose `message` is the failure's display text.
#[derive(Debug, Error)]
pub(crate) enum TransportFailure {
    #[error(transparent)]
    RequestConstruction(#[from] RequestConstructionError),

    #[error("json: unsupported type: {0}")]
    BodyEncoding(#[source] serde_json::Error),

    #[error("context canceled")]
    Canceled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    ResponseRead(#[source] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    ResponseDecode(#[source] serde_json::Error),

    #[error("failed to decode error response with status {status}: {source}")]
    ErrorResponseDecode {
        status: u16,
        source: serde_json::Error,
    },
}

impl From<TransportFailure> for WebflowError {
    fn from(failure: TransportFailure) -> Self {
        let upstream_status = match &failure {
            TransportFailure::ErrorResponseDecode { status, .. } => Some(*status),
            _ => None,
        };
        Self {
            upstream_status,
            ..Self::from_local(failure.to_string())
        }
    }
}

impl From<RequestConstructionError> for WebflowError {
    fn from(error: RequestConstructionError) -> Self {
        TransportFailure::from(error).into()
    }
}
