//! Sites and publishing.

use crate::clients::{call_json, RequestBody, RequestContext, Transport, WebflowError};
use crate::config::WebflowConfig;
use crate::models::{PublishSite, PublishStatus, Site};
use crate::resources::path_segment;

/// Accessor for the `/sites` endpoints.
///
/// # Example
///
/// ```rust,ignore
/// use webflow_api::Webflow;
///
/// let webflow = Webflow::new("my-api-token");
/// for site in webflow.sites().get_list().await? {
///     println!("{} ({})", site.name, site.short_name);
/// }
///
/// let status = webflow
///     .sites()
///     .publish("580e63e98c9a982ac9b8b741", &["www.example.com"])
///     .await?;
/// assert!(status.queued);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Sites<'a> {
    config: &'a WebflowConfig,
    transport: &'a dyn Transport,
}

impl<'a> Sites<'a> {
    /// Binds an accessor to `config` and `transport`.
    #[must_use]
    pub fn new(config: &'a WebflowConfig, transport: &'a dyn Transport) -> Self {
        Self { config, transport }
    }

    /// Lists the sites the token can access.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`WebflowError`] unchanged.
    pub async fn get_list(&self) -> Result<Vec<Site>, WebflowError> {
        self.get_list_with_context(&RequestContext::background()).await
    }

    /// [`get_list`](Self::get_list) with an explicit context.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`WebflowError`] unchanged.
    pub async fn get_list_with_context(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Site>, WebflowError> {
        self.send(ctx, "GET", "/sites", RequestBody::Absent).await
    }

    /// Fetches one site.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`WebflowError`] unchanged.
    pub async fn get(&self, site_id: &str) -> Result<Site, WebflowError> {
        self.get_with_context(&RequestContext::background(), site_id).await
    }

    /// [`get`](Self::get) with an explicit context.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`WebflowError`] unchanged.
    pub async fn get_with_context(
        &self,
        ctx: &RequestContext,
        site_id: &str,
    ) -> Result<Site, WebflowError> {
        let path = format!("/sites/{}", path_segment(site_id));
        self.send(ctx, "GET", &path, RequestBody::Absent).await
    }

    /// Queues a publish of `site_id` to `domains`.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`WebflowError`] unchanged.
    pub async fn publish(
        &self,
        site_id: &str,
        domains: &[&str],
    ) -> Result<PublishStatus, WebflowError> {
        self.publish_with_context(&RequestContext::background(), site_id, domains).await
    }

    /// [`publish`](Self::publish) with an explicit context.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`WebflowError`] unchanged.
    pub async fn publish_with_context(
        &self,
        ctx: &RequestContext,
        site_id: &str,
        domains: &[&str],
    ) -> Result<PublishStatus, WebflowError> {
        let path = format!("/sites/{}/publish", path_segment(site_id));
        let body = RequestBody::json(&PublishSite { domains })?;
        self.send(ctx, "POST", &path, body).await
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        method: &str,
        path: &str,
        body: RequestBody,
    ) -> Result<T, WebflowError> {
        call_json(
            self.transport,
            ctx,
            method,
            &self.config.base_url().join(path),
            self.config.api_key().as_ref(),
            None,
            body,
        )
        .await
    }
}
