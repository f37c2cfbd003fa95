//! The [`Webflow`] entry point.

use std::sync::Arc;

use crate::clients::{HttpTransport, Transport};
use crate::config::WebflowConfig;
use crate::resources::{Domains, Meta, Sites};

/// Entry point wiring a [`WebflowConfig`] and a [`Transport`] into every
/// resource accessor.
///
/// Accessors are created on demand and always use the transport currently
/// bound, so rebinding with [`with_transport`](Self::with_transport) takes
/// effect for every resource at once.
///
/// Cloning is cheap: the config and transport are shared.
///
/// # Example
///
/// ```rust
/// use webflow_api::Webflow;
///
/// let webflow = Webflow::new("apikey_123");
/// assert_eq!(webflow.config().api_key().as_ref(), "apikey_123");
/// assert_eq!(webflow.config().base_url().as_ref(), "https://api.webflow.com");
/// ```
#[derive(Clone, Debug)]
pub struct Webflow {
    config: Arc<WebflowConfig>,
    transport: Arc<dyn Transport>,
}

// Verify Webflow is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Webflow>();
};

impl Webflow {
    /// Creates a client for `api_key` against the public API, using an
    /// [`HttpTransport`].
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(WebflowConfig::new(api_key))
    }

    /// Creates a client from prepared options, using an [`HttpTransport`].
    #[must_use]
    pub fn with_config(config: WebflowConfig) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(HttpTransport::new()),
        }
    }

    /// Rebinds every accessor to `transport`, keeping the config.
    #[must_use]
    pub fn with_transport(self, transport: impl Transport + 'static) -> Self {
        self.with_shared_transport(Arc::new(transport))
    }

    /// Like [`with_transport`](Self::with_transport), for a transport the
    /// caller keeps a handle to.
    #[must_use]
    pub fn with_shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        tracing::debug!(?transport, "rebinding Webflow transport");
        self.transport = transport;
        self
    }

    /// Returns the options shared by every accessor.
    #[must_use]
    pub fn config(&self) -> &WebflowConfig {
        &self.config
    }

    /// Returns the bound transport.
    #[must_use]
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Token and user metadata.
    #[must_use]
    pub fn meta(&self) -> Meta<'_> {
        Meta::new(&self.config, self.transport())
    }

    /// Custom domains.
    #[must_use]
    pub fn domains(&self) -> Domains<'_> {
        Domains::new(&self.config, self.transport())
    }

    /// Sites.
    #[must_use]
    pub fn sites(&self) -> Sites<'_> {
        Sites::new(&self.config, self.transport())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::MockTransport;

    #[test]
    fn test_new_sets_api_key_and_base_url() {
        let webflow = Webflow::new("apikey_123");
        assert_eq!(webflow.config().api_key().as_ref(), "apikey_123");
        assert_eq!(webflow.config().base_url().as_ref(), "https://api.webflow.com");
    }

    #[test]
    fn test_default_transport_is_http() {
        let webflow = Webflow::new("apikey_123");
        assert!(format!("{:?}", webflow.transport()).starts_with("HttpTransport"));
    }

    #[test]
    fn test_with_transport_keeps_config() {
        let webflow = Webflow::new("apikey_123");
        let before = webflow.config().clone();

        let webflow = webflow.with_transport(MockTransport::new());

        assert_eq!(webflow.config(), &before);
        assert!(format!("{:?}", webflow.transport()).starts_with("MockTransport"));
    }

    #[test]
    fn test_debug_does_not_leak_api_key() {
        let webflow = Webflow::new("super-secret");
        assert!(!format!("{webflow:?}").contains("super-secret"));
    }
}
