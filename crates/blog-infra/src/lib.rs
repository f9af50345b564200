//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repository via SeaORM
//!
//! Without `postgres` only the in-memory repository is available.

pub mod database;

pub use database::{DatabaseConfig, InMemoryBlogRepository};

#[cfg(feature = "postgres")]
pub use database::PostgresBlogRepository;
