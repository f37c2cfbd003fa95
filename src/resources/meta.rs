//! Token and user metadata.

use crate::clients::{call_json, RequestBody, RequestContext, Transport, WebflowError};
use crate::config::WebflowConfig;
use crate::models::{AuthorizationInfo, AuthorizedUser};

/// Accessor for `GET /info` and `GET /user`.
///
/// # Example
///
/// ```rust,ignore
/// use webflow_api::Webflow;
///
/// let webflow = Webflow::new("my-api-token");
/// let info = webflow.meta().get_info().await?;
/// let user = webflow.meta().get_user().await?;
/// println!("{} ({} req/min)", user.user.email, info.rate_limit);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Meta<'a> {
    config: &'a WebflowConfig,
    transport: &'a dyn Transport,
}

impl<'a> Meta<'a> {
    /// Binds an accessor to `config` and `transport`.
    #[must_use]
    pub fn new(config: &'a WebflowConfig, transport: &'a dyn Transport) -> Self {
        Self { config, transport }
    }

    /// Fetches information about the current authorization.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`WebflowError`] unchanged.
    pub async fn get_info(&self) -> Result<AuthorizationInfo, WebflowError> {
        self.get_info_with_context(&RequestContext::background()).await
    }

    /// [`get_info`](Self::get_info) with an explicit context.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`WebflowError`] unchanged.
    pub async fn get_info_with_context(
        &self,
        ctx: &RequestContext,
    ) -> Result<AuthorizationInfo, WebflowError> {
        self.get(ctx, "/info").await
    }

    /// Fetches the user the token belongs to.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`WebflowError`] unchanged.
    pub async fn get_user(&self) -> Result<AuthorizedUser, WebflowError> {
        self.get_user_with_context(&RequestContext::background()).await
    }

    /// [`get_user`](Self::get_user) with an explicit context.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`WebflowError`] unchanged.
    pub async fn get_user_with_context(
        &self,
        ctx: &RequestContext,
    ) -> Result<AuthorizedUser, WebflowError> {
        self.get(ctx, "/user").await
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<T, WebflowError> {
        call_json(
            self.transport,
            ctx,
            "GET",
            &self.config.base_url().join(path),
            self.config.api_key().as_ref(),
            None,
            RequestBody::Absent,
        )
        .await
    }
}
