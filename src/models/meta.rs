//! Models returned by the meta endpoints (`/info` and `/user`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

/// Details about the token used for the request, from `GET /info`.
///
/// # Example
///
/// ```rust
/// use webflow_api::models::AuthorizationInfo;
///
/// let info: AuthorizationInfo = serde_json::from_str(r#"{
///     "_id": "55818d58616600637b9a5786",
///     "grantType": "authorization_code",
///     "rateLimit": 60,
///     "status": "confirmed"
/// }"#).unwrap();
///
/// assert_eq!(info.id, "55818d58616600637b9a5786");
/// assert_eq!(info.rate_limit, 60);
/// assert!(info.orgs.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorizationInfo {
    /// Authorization id.
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,

    /// When the authorization was created.
    pub created_on: Option<DateTime<Utc>>,

    /// OAuth grant type, e.g. `"authorization_code"`.
    #[serde(deserialize_with = "null_as_default")]
    pub grant_type: String,

    /// When the token was last used.
    pub last_used: Option<DateTime<Utc>>,

    /// Sites the token has access to.
    #[serde(deserialize_with = "null_as_default")]
    pub sites: Vec<serde_json::Value>,

    /// Organization ids the token has access to.
    #[serde(deserialize_with = "null_as_default")]
    pub orgs: Vec<String>,

    /// Workspaces the token has access to.
    #[serde(deserialize_with = "null_as_default")]
    pub workspaces: Vec<serde_json::Value>,

    /// User ids the token has access to.
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<String>,

    /// Requests per minute allowed for the token.
    #[serde(deserialize_with = "null_as_default")]
    pub rate_limit: u32,

    /// Authorization status, e.g. `"confirmed"`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,

    /// Application the token was issued to.
    #[serde(deserialize_with = "null_as_default")]
    pub application: Application,
}

/// The application an authorization was issued to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub homepage: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub owner: String,
    /// `"Person"` or `"Organization"`.
    #[serde(deserialize_with = "null_as_default")]
    pub owner_type: String,
}

/// Wrapper returned by `GET /user`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizedUser {
    #[serde(deserialize_with = "null_as_default")]
    pub user: AuthorizedUserDetail,
}

/// The user the token belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorizedUserDetail {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
}
