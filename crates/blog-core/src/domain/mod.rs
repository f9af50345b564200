//! Domain entities - the core business objects.

mod blog;

pub use blog::{Blog, BlogId, BlogPatch, NewBlog, last_updated, timestamp_now};
