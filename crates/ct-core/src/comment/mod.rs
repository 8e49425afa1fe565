//! Comment system module
//!
//! Handles the comment/reply model, the thread engine, body validation and
//! relative timestamps.

pub mod model;
pub mod thread;
pub mod validator;
pub mod builder;
pub mod time;

pub use model::*;
pub use thread::{NodeRef, Thread, ThreadSettings};
pub use validator::CommentValidator;
pub use builder::CommentBuilder;
pub use time::{format_relative, RelativeTime};
