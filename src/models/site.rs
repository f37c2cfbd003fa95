//! Site models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

/// A Webflow site, from `GET /sites` and `GET /sites/{site_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Site {
    /// Site id.
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,

    /// When the site was created.
    pub created_on: Option<DateTime<Utc>>,

    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Slug used in the `webflow.io` subdomain.
    #[serde(deserialize_with = "null_as_default")]
    pub short_name: String,

    /// When the site was last published; `None` if never.
    pub last_published: Option<DateTime<Utc>>,

    /// Screenshot URL.
    #[serde(deserialize_with = "null_as_default")]
    pub preview_url: String,

    /// IANA time zone, e.g. `"America/Los_Angeles"`.
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,

    /// Id of the site's CMS database.
    #[serde(deserialize_with = "null_as_default")]
    pub database: String,
}

/// Body of `POST /sites/{site_id}/publish`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PublishSite<'a> {
    /// Domains to publish to.
    pub domains: &'a [&'a str],
}

/// Response of `POST /sites/{site_id}/publish`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishStatus {
    /// Whether a publish job was queued.
    #[serde(deserialize_with = "null_as_default")]
    pub queued: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_site_deserializes() {
        let site: Site = serde_json::from_value(json!({
            "_id": "580e63e98c9a982ac9b8b741",
            "createdOn": "2016-10-24T19:41:29.156Z",
            "name": "api_docs_sample_json",
            "shortName": "api-docs-sample-json",
            "lastPublished": "2016-10-24T19:43:17.271Z",
            "previewUrl": "https://screenshots.webflow.com/sites/580e63e98c9a982ac9b8b741/20161024194317.png",
            "timezone": "America/Los_Angeles",
            "database": "580e63fc8c9a982ac9b8b744"
        }))
        .unwrap();

        assert_eq!(site.id, "580e63e98c9a982ac9b8b741");
        assert_eq!(site.short_name, "api-docs-sample-json");
        assert_eq!(
            site.last_published,
            Some("2016-10-24T19:43:17.271Z".parse().unwrap())
        );
        assert_eq!(site.database, "580e63fc8c9a982ac9b8b744");
    }

    #[test]
    fn test_site_never_published() {
        let site: Site =
            serde_json::from_value(json!({"_id": "1", "lastPublished": null})).unwrap();
        assert!(site.last_published.is_none());
        assert!(site.created_on.is_none());
    }

    #[test]
    fn test_publish_site_serializes_domains() {
        let body = PublishSite {
            domains: &["test-api-domain.com", "www.test-api-domain.com"],
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"domains": ["test-api-domain.com", "www.test-api-domain.com"]})
        );
    }

    #[test]
    fn test_publish_status_deserializes() {
        let status: PublishStatus = serde_json::from_str(r#"{"queued": true}"#).unwrap();
        assert!(status.queued);
    }

    #[test]
    fn test_site_null_fields_take_zero_values() {
        let site: Site = serde_json::from_value(json!({
            "_id": "580e63e98c9a982ac9b8b741",
            "name": null,
            "shortName": null,
            "lastPublished": null,
            "previewUrl": null,
            "timezone": null,
            "database": null
        }))
        .unwrap();

        assert_eq!(
            site,
            Site {
                id: "580e63e98c9a982ac9b8b741".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_publish_status_null_is_not_queued() {
        let status: PublishStatus = serde_json::from_value(json!({"queued": null})).unwrap();
        assert!(!status.queued);
    }
}
