use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Primary key of a blog record (`SERIAL` column).
pub type BlogId = i32;

/// Blog entity - a single persisted blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Merge the fields present in `patch` and refresh `updated_at`.
    ///
    /// `updated_at` always moves forward, even when the clock has not
    /// advanced past the previous value.
    pub fn apply(&mut self, patch: BlogPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        self.updated_at = now.max(self.updated_at + Duration::microseconds(1));
    }
}

/// Validated input for creating a blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    pub title: String,
    pub content: String,
}

impl NewBlog {
    /// Validate raw create input. Both fields are required and must be non-empty.
    pub fn new(title: String, content: String) -> Result<Self, DomainError> {
        let mut errors = Vec::new();
        if title.is_empty() {
            errors.push("title should not be empty".to_string());
        }
        if content.is_empty() {
            errors.push("content should not be empty".to_string());
        }

        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        Ok(Self { title, content })
    }
}

/// Validated partial update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl BlogPatch {
    /// Validate raw update input. Present fields must be non-empty.
    pub fn new(title: Option<String>, content: Option<String>) -> Result<Self, DomainError> {
        let mut errors = Vec::new();
        if title.as_deref().is_some_and(str::is_empty) {
            errors.push("title should not be empty".to_string());
        }
        if content.as_deref().is_some_and(str::is_empty) {
            errors.push("content should not be empty".to_string());
        }

        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        Ok(Self { title, content })
    }
}

/// Current time at the resolution PostgreSQL stores (`timestamptz`, microseconds).
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Most recent modification time across `blogs`, or `None` when empty.
///
/// This scans every record; there is no stored aggregate.
pub fn last_updated(blogs: &[Blog]) -> Option<DateTime<Utc>> {
    blogs
        .iter()
        .map(|b| b.updated_at.max(b.created_at))
        .max()
}
