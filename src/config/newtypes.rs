//! Checked wrappers for the API token and base URL.
//!
//! [`ApiKey`] and [`BaseUrl`] are checked once in `new`, so a
//! [`WebflowConfig`](crate::WebflowConfig) built from them never holds an
//! empty token or a non-HTTP base.

use crate::error::ConfigError;
use std::fmt;

/// A Webflow API token.
///
/// The token is sent as `Authorization: Bearer <token>` on every request.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `ApiKey(*****)` so it never lands in logs by accident.
///
/// # Example
///
/// ```rust
/// use webflow_api::ApiKey;
///
/// let key = ApiKey::new("my-api-token").unwrap();
/// assert_eq!(key.as_ref(), "my-api-token");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }

    /// Wraps a key without validating it.
    ///
    /// Used by [`Webflow::new`](crate::Webflow::new), which accepts any string
    /// and lets the API reject a bad token.
    pub(crate) fn unchecked(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated API base URL.
///
/// Must be an absolute `http` or `https` URL with a host. Trailing slashes
/// are removed so path templates can be appended directly.
///
/// # Example
///
/// ```rust
/// use webflow_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.webflow.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.webflow.com");
///
/// assert!(BaseUrl::new("api.webflow.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not parse, has
    /// a scheme other than `http`/`https`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let parsed = reqwest::Url::parse(&url).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(invalid());
        }

        Ok(Self(url.trim_end_matches('/').to_string()))
    }

    pub(crate) fn unchecked(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Appends `path` (which must start with `/`) to the base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.0)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_debug_is_masked() {
        let key = ApiKey::new("super-secret-token").unwrap();
        let debug = format!("{key:?}");
        assert_eq!(debug, "ApiKey(*****)");
        assert!(!debug.contains("super-secret-token"));
    }

    #[test]
    fn test_api_key_unchecked_allows_empty() {
        assert_eq!(ApiKey::unchecked("").as_ref(), "");
    }

    #[test]
    fn test_base_url_accepts_http_and_https() {
        assert!(BaseUrl::new("https://api.webflow.com").is_ok());
        assert!(BaseUrl::new("http://127.0.0.1:8080").is_ok());
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let url = BaseUrl::new("http://localhost:3000///").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:3000");
    }

    #[test]
    fn test_base_url_rejects_other_schemes_and_relative_urls() {
        for bad in ["", "api.webflow.com", "ftp://api.webflow.com", "mailto:a@b.c"] {
            assert!(
                matches!(BaseUrl::new(bad), Err(ConfigError::InvalidBaseUrl { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_base_url_join() {
        let url = BaseUrl::new("https://api.webflow.com").unwrap();
        assert_eq!(url.join("/info"), "https://api.webflow.com/info");
    }
}
