//! DTOs for link creation and management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to shorten a URL.
///
/// `original_url` is modeled as optional so that its absence produces the
/// endpoint's own validation message instead of a body-rejection error;
/// the handler enforces presence.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub original_url: Option<String>,
    pub custom_alias: Option<String>,
    pub title: Option<String>,
}

/// Request to update a link's mutable fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    /// New title; absent or null clears it.
    pub title: Option<String>,
}

/// A link as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkData {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub title: Option<String>,
    pub custom_alias: Option<String>,
    pub is_custom: bool,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl LinkData {
    /// Builds the response shape from a stored link and its rendered
    /// short URL.
    pub fn from_link(link: Link, short_url: String) -> Self {
        let custom_alias = link.is_custom.then(|| link.code.clone());

        Self {
            id: link.id,
            original_url: link.original_url,
            short_code: link.code,
            short_url,
            title: link.title,
            custom_alias,
            is_custom: link.is_custom,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_link(is_custom: bool) -> Link {
        Link {
            id: 1,
            code: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            title: Some("Example".to_string()),
            owner_id: None,
            is_custom,
            clicks: 3,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let data = LinkData::from_link(
            sample_link(false),
            "http://localhost:3000/abc123".to_string(),
        );

        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["originalUrl"], "https://example.com");
        assert_eq!(json["shortCode"], "abc123");
        assert_eq!(json["shortUrl"], "http://localhost:3000/abc123");
        assert_eq!(json["isCustom"], false);
        assert_eq!(json["customAlias"], serde_json::Value::Null);
        assert_eq!(json["clicks"], 3);
    }

    #[test]
    fn test_custom_alias_mirrors_code() {
        let data = LinkData::from_link(
            sample_link(true),
            "http://localhost:3000/abc123".to_string(),
        );

        assert_eq!(data.custom_alias.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_deserializes_camel_case_request() {
        let request: ShortenRequest = serde_json::from_str(
            r#"{"originalUrl": "https://example.com", "customAlias": "my-link"}"#,
        )
        .unwrap();

        assert_eq!(request.original_url.as_deref(), Some("https://example.com"));
        assert_eq!(request.custom_alias.as_deref(), Some("my-link"));
        assert!(request.title.is_none());
    }
}
