use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Blog, BlogId, NewBlog};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist changes to an existing entity.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` if nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog repository.
#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, BlogId> {
    /// All blogs, ordered by id.
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError>;

    /// Insert a new row; the repository assigns the id.
    async fn insert(&self, blog: NewBlog, at: DateTime<Utc>) -> Result<Blog, RepoError>;

    /// Remove every row, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, RepoError>;
}
