//! Custom domain model.

use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

/// A custom domain attached to a site, from `GET /sites/{site_id}/domains`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    /// Domain id.
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    /// Host name, e.g. `"www.example.com"`.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}
