//! Response envelopes and RFC 7807 error bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard successful API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub message: String,
    /// When the response was generated.
    pub date: DateTime<Utc>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(status_code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            status_code,
            message: message.into(),
            date: Utc::now(),
            data,
        }
    }

    pub fn ok(data: T) -> Self {
        Self::new(200, "OK", data)
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self::new(200, message, data)
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::new(201, message, data)
    }
}

/// Envelope for collection reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub status_code: u16,
    pub message: String,
    pub count: usize,
    /// Latest modification across `data`, `null` for an empty collection.
    pub updated_at: Option<DateTime<Utc>>,
    pub date: DateTime<Utc>,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn ok(data: Vec<T>, updated_at: Option<DateTime<Utc>>) -> Self {
        Self {
            status_code: 200,
            message: "OK".to_string(),
            count: data.len(),
            updated_at,
            date: Utc::now(),
            data,
        }
    }
}

/// Envelope for bulk operations that only report how many rows they touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountResponse {
    pub status_code: u16,
    pub message: String,
    pub date: DateTime<Utc>,
    pub count: u64,
}

impl CountResponse {
    pub fn ok(count: u64, message: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            message: message.into(),
            date: Utc::now(),
            count,
        }
    }
}

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request").with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_detail(detail)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_serializes_null_updated_at() {
        let json = serde_json::to_value(ListResponse::<u8>::ok(Vec::new(), None)).unwrap();

        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["count"], 0);
        assert!(json["updatedAt"].is_null());
        assert!(json["data"].as_array().unwrap().is_empty());
    }

    #[test]
    fn envelope_carries_status_and_date() {
        let json = serde_json::to_value(ApiResponse::created(5, "Blog created")).unwrap();

        assert_eq!(json["statusCode"], 201);
        assert_eq!(json["message"], "Blog created");
        assert_eq!(json["data"], 5);
        assert!(json["date"].is_string());
    }

    #[test]
    fn error_response_omits_empty_fields() {
        let json = serde_json::to_value(ErrorResponse::internal_error()).unwrap();
        assert_eq!(json["type"], "about:blank");
        assert_eq!(json["status"], 500);
        assert!(json.get("detail").is_none());
    }
}
