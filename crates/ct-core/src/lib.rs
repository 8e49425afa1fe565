//! ct-core - Core library for comment-tree
//!
//! This crate provides the comment tree engine: a two-level thread of
//! comments and replies with like toggling, plus the discussion layer a
//! host view drives, thread file format, exporters and demo seed data.

pub mod error;
pub mod types;
pub mod config;
pub mod comment;
pub mod discussion;
pub mod storage;
pub mod export;
pub mod seed;

pub use error::{CommentTreeError, Result};
pub use types::*;
