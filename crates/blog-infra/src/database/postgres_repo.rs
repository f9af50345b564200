//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};

use blog_core::domain::{Blog, NewBlog};
use blog_core::error::RepoError;
use blog_core::ports::BlogRepository;

use super::entity::blog::{self, Entity as BlogEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL blog repository.
pub type PostgresBlogRepository = PostgresBaseRepository<BlogEntity>;

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        let result = BlogEntity::find()
            .order_by_asc(blog::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, new_blog: NewBlog, at: DateTime<Utc>) -> Result<Blog, RepoError> {
        let model = blog::ActiveModel::from_new(new_blog, at)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(blog_id = model.id, "Inserted blog");
        Ok(model.into())
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let result = BlogEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(rows = result.rows_affected, "Deleted all blogs");
        Ok(result.rows_affected)
    }
}
