//! `BlogStore` - the blog lifecycle on top of a `BlogRepository`.
//!
//! Repositories only move rows. Timestamps, partial-update merging and
//! not-found detection live here so every backend behaves the same.

use std::sync::Arc;

use crate::domain::{Blog, BlogId, BlogPatch, NewBlog, timestamp_now};
use crate::error::{DomainError, RepoError};
use crate::ports::BlogRepository;

/// Durable CRUD for blog records.
#[derive(Clone)]
pub struct BlogStore {
    repo: Arc<dyn BlogRepository>,
}

impl BlogStore {
    pub fn new(repo: Arc<dyn BlogRepository>) -> Self {
        Self { repo }
    }

    /// Every record. An empty store yields an empty vec.
    pub async fn list(&self) -> Result<Vec<Blog>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get_by_id(&self, id: BlogId) -> Result<Blog, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::blog_not_found(id))
    }

    /// Create a record with `created_at == updated_at == now`.
    pub async fn insert(&self, blog: NewBlog) -> Result<Blog, DomainError> {
        Ok(self.repo.insert(blog, timestamp_now()).await?)
    }

    /// Merge `patch` into the stored record and refresh `updated_at`.
    ///
    /// Read-then-write with no locking: concurrent updates to the same id
    /// resolve as last write wins.
    pub async fn update(&self, id: BlogId, patch: BlogPatch) -> Result<Blog, DomainError> {
        let mut blog = self.get_by_id(id).await?;
        blog.apply(patch, timestamp_now());

        self.repo.save(blog).await.map_err(|e| not_found_or(e, id))
    }

    pub async fn delete_by_id(&self, id: BlogId) -> Result<(), DomainError> {
        let blog = self.get_by_id(id).await?;

        self.repo
            .delete(blog.id)
            .await
            .map_err(|e| not_found_or(e, id))
    }

    /// Remove every record unconditionally, returning the count removed.
    pub async fn delete_all(&self) -> Result<u64, DomainError> {
        Ok(self.repo.delete_all().await?)
    }
}

// The row can vanish between the read and the write.
fn not_found_or(err: RepoError, id: BlogId) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::blog_not_found(id),
        other => DomainError::Storage(other),
    }
}
