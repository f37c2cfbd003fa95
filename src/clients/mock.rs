//! In-process [`Transport`] double.
//!
//! [`MockTransport`] records every call and answers from a queue of canned
//! results, so accessor code can be tested without a server.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use webflow_api::clients::MockTransport;
//! use webflow_api::Webflow;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mock = Arc::new(MockTransport::new().respond_with(json!([
//!     {"_id": "589a331aa51e760df7ccb89d", "name": "test-api-domain.com"}
//! ])));
//! let webflow = Webflow::new("apikey_123").with_shared_transport(mock.clone());
//!
//! let domains = webflow.domains().get_list("5ee5e7459c39a7e47341f82f").await.unwrap();
//! assert_eq!(domains[0].name, "test-api-domain.com");
//! assert_eq!(
//!     mock.calls()[0].url,
//!     "https://api.webflow.com/sites/5ee5e7459c39a7e47341f82f/domains"
//! );
//! # }
//! ```

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::clients::errors::WebflowError;
use crate::clients::http_request::{RequestBody, RequestContext};
use crate::clients::transport::Transport;

/// One call observed by a [`MockTransport`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    /// The method string as passed by the caller.
    pub method: String,
    /// The full URL.
    pub url: String,
    /// The API key.
    pub api_key: String,
    /// Caller-supplied headers; `None` when the defaults were requested.
    pub headers: Option<HeaderMap>,
    /// The body.
    pub body: RequestBody,
}

/// A [`Transport`] that replays queued results.
///
/// Results are returned in the order they were queued. When the queue is
/// empty the call fails with a local error.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<serde_json::Value, WebflowError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    /// Creates a mock with no queued results.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    #[must_use]
    pub fn respond_with(self, value: serde_json::Value) -> Self {
        self.push(Ok(value));
        self
    }

    /// Queues a failure.
    #[must_use]
    pub fn fail_with(self, error: WebflowError) -> Self {
        self.push(Err(error));
        self
    }

    /// Queues a result on a shared mock.
    pub fn push(&self, result: Result<serde_json::Value, WebflowError>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(result);
    }

    /// Returns every call made so far.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn call(
        &self,
        _ctx: &RequestContext,
        method: &str,
        url: &str,
        api_key: &str,
        headers: Option<&HeaderMap>,
        body: RequestBody,
    ) -> Result<serde_json::Value, WebflowError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                method: method.to_string(),
                url: url.to_string(),
                api_key: api_key.to_string(),
                headers: headers.cloned(),
                body,
            });

        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(WebflowError::from_local("mock transport has no queued response")))
    }
}
