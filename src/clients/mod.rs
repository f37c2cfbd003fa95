//! Transport layer for Webflow API communication.
//!
//! # Overview
//!
//! - [`Transport`]: the call primitive every accessor goes through
//! - [`HttpTransport`]: the `reqwest`-backed implementation
//! - [`MockTransport`]: an in-process double for tests
//! - [`call_json`]: a call decoded into a typed result
//! - [`RequestBody`] and [`RequestContext`]: call inputs
//! - [`WebflowError`]: the single error type for every call
//!
//! # Example
//!
//! ```rust,ignore
//! use webflow_api::clients::{call_json, HttpTransport, RequestBody, RequestContext};
//! use webflow_api::models::AuthorizationInfo;
//!
//! let transport = HttpTransport::new();
//! let info: AuthorizationInfo = call_json(
//!     &transport,
//!     &RequestContext::background(),
//!     "GET",
//!     "https://api.webflow.com/info",
//!     "my-api-token",
//!     None,
//!     RequestBody::Absent,
//! )
//! .await?;
//! ```
//!
//! # Headers
//!
//! Passing `None` or an empty map selects the default header set
//! (`Authorization: Bearer <key>`, `accept-version: 1.0.0`,
//! `Content-Type: application/json`). A non-empty map replaces that set
//! entirely; only the bearer token is still added. Callers overriding
//! headers must add `accept-version` and `Content-Type` themselves.

mod errors;
mod http_request;
mod http_transport;
mod mock;
mod transport;

pub use errors::{ErrorOrigin, WebflowError, LOCAL_ERROR_CODE, LOCAL_ERROR_TAG};
pub use http_request::{
    default_headers, RequestBody, RequestContext, ACCEPT_VERSION, ACCEPT_VERSION_HEADER,
};
pub use http_transport::{HttpTransport, SDK_VERSION};
pub use mock::{MockTransport, RecordedCall};
pub use transport::{call_json, Transport};
