//! # Blog Core
//!
//! The domain layer of the blog service.
//! This crate contains the `Blog` lifecycle rules with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::BlogStore;
