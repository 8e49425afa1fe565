//! ct-storage - Storage library for comment-tree
//!
//! This crate provides a file-system backend for persisting threads between
//! runs of a host application.

mod thread_store;

pub use thread_store::FileSystemStorage;
