//! Async HTTP client for the blog API.
//!
//! Each call is a single round trip: no retries, caching or request
//! deduplication. Any non-2xx status becomes [`ClientError::Http`] carrying the
//! status code and the raw response body.

pub mod client;
pub mod error;

pub use client::BlogClient;
pub use error::ClientError;

pub use blog_shared::{
    ApiResponse, BlogResponse, CountResponse, CreateBlogRequest, DeletedBlog, ListResponse,
    UpdateBlogRequest,
};
