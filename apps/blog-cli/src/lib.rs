//! # Blog CLI
//!
//! Terminal front end for the blog API: list and detail views plus an
//! interactive management session.

pub mod board;
pub mod command;
pub mod manage;
pub mod prompt;
pub mod view;
