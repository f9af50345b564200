//! In-memory blog repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use blog_core::domain::{Blog, BlogId, NewBlog};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogRepository};

struct Table {
    rows: BTreeMap<BlogId, Blog>,
    next_id: BlogId,
}

/// In-memory repository using an ordered map behind an async RwLock.
///
/// Ids count up from 1 and are never reused, like a `SERIAL` column.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogRepository {
    table: RwLock<Table>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Blog, BlogId> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, blog: Blog) -> Result<Blog, RepoError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&blog.id) {
            Some(row) => {
                *row = blog.clone();
                Ok(blog)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: BlogId) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn insert(&self, new_blog: NewBlog, at: DateTime<Utc>) -> Result<Blog, RepoError> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| RepoError::Constraint("blog id sequence exhausted".to_string()))?;

        let blog = Blog {
            id,
            title: new_blog.title,
            content: new_blog.content,
            created_at: at,
            updated_at: at,
        };
        table.rows.insert(id, blog.clone());

        Ok(blog)
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut table = self.table.write().await;
        let count = table.rows.len() as u64;
        table.rows.clear();
        Ok(count)
    }
}
