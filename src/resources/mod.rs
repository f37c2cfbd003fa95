//! Per-resource accessors.
//!
//! Each accessor borrows the [`WebflowConfig`](crate::WebflowConfig) and
//! [`Transport`](crate::clients::Transport) of the [`Webflow`](crate::Webflow)
//! that created it, and holds no other state. Every operation comes in a
//! convenience form using [`RequestContext::background`] and a
//! `_with_context` form.
//!
//! [`RequestContext::background`]: crate::clients::RequestContext::background

mod domain;
mod meta;
mod site;

pub use domain::Domains;
pub use meta::Meta;
pub use site::Sites;

/// Percent-encodes an id for use as a single path segment.
fn path_segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}
