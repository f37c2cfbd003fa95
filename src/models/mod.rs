//! Data records mirroring the Webflow API's JSON shapes.
//!
//! Every model decodes leniently: unknown fields are ignored and missing
//! fields, or fields sent as `null`, take their zero value. Upstream `_id`
//! keys map to `id`.

use serde::{Deserialize, Deserializer};

mod domain;
mod meta;
mod site;

pub use domain::Domain;
pub use meta::{Application, AuthorizationInfo, AuthorizedUser, AuthorizedUserDetail};
pub use site::{PublishSite, PublishStatus, Site};

/// Decodes an explicit `null` as the field's zero value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
