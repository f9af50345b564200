//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::BlogStore;
use blog_core::ports::BlogRepository;
use blog_infra::{DatabaseConfig, InMemoryBlogRepository};

#[cfg(feature = "postgres")]
use anyhow::Context;
#[cfg(feature = "postgres")]
use blog_infra::PostgresBlogRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: BlogStore,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// The in-memory store is only used when no database is configured. A
    /// configured database that cannot be reached is an error.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        #[cfg(feature = "postgres")]
        let repo: Arc<dyn BlogRepository> = {
            if let Some(config) = db_config {
                let conn = blog_infra::database::connect(config)
                    .await
                    .context("Failed to connect to database")?;
                Arc::new(PostgresBlogRepository::new(conn))
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryBlogRepository::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let repo: Arc<dyn BlogRepository> = {
            if db_config.is_some() {
                anyhow::bail!("DATABASE_URL is set but the server was built without postgres support");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            Arc::new(InMemoryBlogRepository::new())
        };

        tracing::info!("Application state initialized");

        Ok(Self::with_repository(repo))
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryBlogRepository::new()))
    }

    pub fn with_repository(repo: Arc<dyn BlogRepository>) -> Self {
        Self {
            blogs: BlogStore::new(repo),
        }
    }
}
