//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBlogRequest {
    pub title: String,
    pub content: String,
}

/// Request to update a blog. Omitted (or `null`) fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A blog record as exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload of a single delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedBlog {
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_response_uses_camel_case_timestamps() {
        let now = Utc::now();
        let json = serde_json::to_value(BlogResponse {
            id: 1,
            title: "A".into(),
            content: "B".into(),
            created_at: now,
            updated_at: now,
        })
        .unwrap();

        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn update_request_treats_null_as_absent() {
        let req: UpdateBlogRequest = serde_json::from_str(r#"{"title":null}"#).unwrap();
        assert_eq!(req, UpdateBlogRequest::default());

        let body = serde_json::to_string(&UpdateBlogRequest {
            title: Some("C".into()),
            content: None,
        })
        .unwrap();
        assert_eq!(body, r#"{"title":"C"}"#);
    }
}
