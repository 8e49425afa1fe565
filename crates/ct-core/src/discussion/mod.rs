//! Discussion module
//!
//! The host-view side of the engine: which post is open, who is looking at
//! it, and what they are typing.
//!
//! # Example
//!
//! ```ignore
//! use ct_core::discussion::{Discussion, Viewer};
//! use ct_core::PostId;
//!
//! let mut discussion = Discussion::new(PostId::from_string("game-42")?, Viewer::new("alice"));
//! let comment = discussion.comment("hello")?.expect("non-empty body");
//! discussion.reply(comment.id(), "hi back")?;
//! assert_eq!(discussion.header(), "Comments (2)");
//! ```

mod composer;
mod model;

pub use composer::Composer;
pub use model::{Discussion, Viewer};
