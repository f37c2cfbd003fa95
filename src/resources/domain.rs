//! Custom domains of a site.

use crate::clients::{call_json, RequestBody, RequestContext, Transport, WebflowError};
use crate::config::WebflowConfig;
use crate::models::Domain;
use crate::resources::path_segment;

/// Accessor for `GET /sites/{site_id}/domains`.
#[derive(Clone, Copy, Debug)]
pub struct Domains<'a> {
    config: &'a WebflowConfig,
    transport: &'a dyn Transport,
}

impl<'a> Domains<'a> {
    /// Binds an accessor to `config` and `transport`.
    #[must_use]
    pub fn new(config: &'a WebflowConfig, transport: &'a dyn Transport) -> Self {
        Self { config, transport }
    }

    /// Lists the custom domains of `site_id`.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`WebflowError`] unchanged.
    pub async fn get_list(&self, site_id: &str) -> Result<Vec<Domain>, WebflowError> {
        self.get_list_with_context(&RequestContext::background(), site_id).await
    }

    /// [`get_list`](Self::get_list) with an explicit context.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`WebflowError`] unchanged.
    pub async fn get_list_with_context(
        &self,
        ctx: &RequestContext,
        site_id: &str,
    ) -> Result<Vec<Domain>, WebflowError> {
        let url = self
            .config
            .base_url()
            .join(&format!("/sites/{}/domains", path_segment(site_id)));

        call_json(
            self.transport,
            ctx,
            "GET",
            &url,
            self.config.api_key().as_ref(),
            None,
            RequestBody::Absent,
        )
        .await
    }
}
