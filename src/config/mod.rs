//! Configuration types for the Webflow API SDK.
//!
//! # Overview
//!
//! - [`WebflowConfig`]: the immutable per-session options (API key and base URL)
//! - [`WebflowConfigBuilder`]: a validating builder for [`WebflowConfig`]
//! - [`ApiKey`]: the API token newtype with masked debug output
//! - [`BaseUrl`]: a validated API origin
//!
//! # Example
//!
//! ```rust
//! use webflow_api::{ApiKey, BaseUrl, WebflowConfig};
//!
//! let config = WebflowConfig::builder()
//!     .api_key(ApiKey::new("my-api-token").unwrap())
//!     .base_url(BaseUrl::new("http://localhost:8080").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "http://localhost:8080");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use crate::error::ConfigError;

/// The fixed upstream API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.webflow.com";

/// Options shared by every resource accessor.
///
/// Created once per [`Webflow`](crate::Webflow) instance and never mutated
/// afterwards.
///
/// # Example
///
/// ```rust
/// use webflow_api::WebflowConfig;
///
/// let config = WebflowConfig::new("my-api-token");
/// assert_eq!(config.api_key().as_ref(), "my-api-token");
/// assert_eq!(config.base_url().as_ref(), "https://api.webflow.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebflowConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
}

// Verify WebflowConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebflowConfig>();
};

impl WebflowConfig {
    /// Creates options for `api_key` against [`DEFAULT_BASE_URL`].
    ///
    /// The key is not validated; use [`WebflowConfig::builder`] for that.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: ApiKey::unchecked(api_key),
            base_url: BaseUrl::unchecked(DEFAULT_BASE_URL),
        }
    }

    /// Creates a new builder for constructing a `WebflowConfig`.
    #[must_use]
    pub fn builder() -> WebflowConfigBuilder {
        WebflowConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }
}

/// Builder for constructing [`WebflowConfig`] instances.
///
/// `api_key` is required. `base_url` defaults to [`DEFAULT_BASE_URL`].
#[derive(Debug, Default)]
pub struct WebflowConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
}

impl WebflowConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Builds the [`WebflowConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<WebflowConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(WebflowConfig {
            api_key,
            base_url: self
                .base_url
                .unwrap_or_else(|| BaseUrl::unchecked(DEFAULT_BASE_URL)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_base_url() {
        let config = WebflowConfig::new("apikey_123");
        assert_eq!(config.api_key().as_ref(), "apikey_123");
        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = WebflowConfigBuilder::new().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_defaults_base_url() {
        let config = WebflowConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();
        assert_eq!(config.base_url().as_ref(), "https://api.webflow.com");
    }

    #[test]
    fn test_builder_with_custom_base_url() {
        let config = WebflowConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .base_url(BaseUrl::new("http://localhost:9000/").unwrap())
            .build()
            .unwrap();
        assert_eq!(config.base_url().join("/user"), "http://localhost:9000/user");
    }

    #[test]
    fn test_config_debug_masks_api_key() {
        let config = WebflowConfig::new("secret-token");
        let debug = format!("{config:?}");
        assert!(debug.contains("WebflowConfig"));
        assert!(!debug.contains("secret-token"));
    }
}
