//! Comment builder for fluent API
//!
//! Used to construct seeded or restored nodes with explicit timestamps and
//! like state. The thread engine builds its own nodes through the same path.

use super::model::{Comment, Likes, Reply};
use crate::error::{CommentTreeError, Result};
use crate::types::CommentId;
use chrono::{DateTime, Utc};

/// Builder for creating comments and replies with fluent API
#[derive(Debug, Clone)]
pub struct CommentBuilder {
    id: Option<CommentId>,
    author: String,
    body: Option<String>,
    created_at: Option<DateTime<Utc>>,
    avatar: Option<String>,
    likes: Likes,
    replies: Vec<Reply>,
}

impl CommentBuilder {
    /// Create a new builder for a node posted by `author`
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            id: None,
            author: author.into(),
            body: None,
            created_at: None,
            avatar: None,
            likes: Likes::default(),
            replies: Vec::new(),
        }
    }

    /// Use a fixed ID instead of a generated one
    pub fn id(mut self, id: CommentId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the body text
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the creation time (defaults to now)
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set the avatar
    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Set an optional avatar
    pub fn maybe_avatar(mut self, avatar: Option<String>) -> Self {
        self.avatar = avatar;
        self
    }

    /// Set the initial like state
    pub fn likes(mut self, count: u32, liked_by_viewer: bool) -> Self {
        self.likes = Likes::new(count, liked_by_viewer);
        self
    }

    /// Attach a reply (top-level comments only)
    pub fn reply(mut self, reply: Reply) -> Self {
        self.replies.push(reply);
        self
    }

    fn finish(&mut self) -> Result<(CommentId, String, DateTime<Utc>)> {
        if self.author.trim().is_empty() {
            return Err(CommentTreeError::Validation(
                "Author cannot be empty".to_string(),
            ));
        }

        let body = self.body.take().ok_or_else(|| {
            CommentTreeError::Validation("Comment body is required".to_string())
        })?;

        let body = body.trim();
        if body.is_empty() {
            return Err(CommentTreeError::Validation(
                "Comment body cannot be empty".to_string(),
            ));
        }

        Ok((
            self.id.take().unwrap_or_default(),
            body.to_string(),
            self.created_at.unwrap_or_else(Utc::now),
        ))
    }

    /// Build a top-level comment
    pub fn build(mut self) -> Result<Comment> {
        let (id, body, created_at) = self.finish()?;

        Ok(Comment {
            id,
            author: self.author,
            body,
            created_at,
            avatar: self.avatar,
            likes: self.likes,
            replies: self.replies,
        })
    }

    /// Build a reply; fails if replies were attached
    pub fn build_reply(mut self) -> Result<Reply> {
        if !self.replies.is_empty() {
            return Err(CommentTreeError::Validation(
                "Replies cannot have replies".to_string(),
            ));
        }

        let (id, body, created_at) = self.finish()?;

        Ok(Reply {
            id,
            author: self.author,
            body,
            created_at,
            avatar: self.avatar,
            likes: self.likes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::model::Node;

    #[test]
    fn test_basic_builder() {
        let comment = CommentBuilder::new("alice").body("hello").build().unwrap();

        assert_eq!(comment.author(), "alice");
        assert_eq!(comment.body(), "hello");
        assert_eq!(comment.likes(), Likes::default());
        assert!(comment.replies().is_empty());
        assert!(comment.avatar().is_none());
    }

    #[test]
    fn test_builder_trims_body() {
        let comment = CommentBuilder::new("alice").body("  hi  ").build().unwrap();
        assert_eq!(comment.body(), "hi");
    }

    #[test]
    fn test_builder_with_fixed_fields() {
        let id = CommentId::new();
        let at = Utc::now() - chrono::Duration::hours(1);
        let comment = CommentBuilder::new("iris")
            .id(id.clone())
            .body("seeded")
            .created_at(at)
            .avatar("👩‍💻")
            .likes(5, false)
            .build()
            .unwrap();

        assert_eq!(comment.id(), &id);
        assert_eq!(comment.created_at(), at);
        assert_eq!(comment.avatar(), Some("👩‍💻"));
        assert_eq!(comment.likes().count(), 5);
    }

    #[test]
    fn test_builder_with_replies() {
        let reply = CommentBuilder::new("bob").body("first").build_reply().unwrap();
        let comment = CommentBuilder::new("alice")
            .body("root")
            .reply(reply.clone())
            .build()
            .unwrap();

        assert_eq!(comment.replies(), &[reply]);
    }

    #[test]
    fn test_reply_with_replies_fails() {
        let nested = CommentBuilder::new("bob").body("x").build_reply().unwrap();
        let result = CommentBuilder::new("carol")
            .body("y")
            .reply(nested)
            .build_reply();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_without_body_fails() {
        assert!(CommentBuilder::new("alice").build().is_err());
    }

    #[test]
    fn test_builder_with_empty_body_fails() {
        assert!(CommentBuilder::new("alice").body("   ").build().is_err());
    }

    #[test]
    fn test_builder_with_empty_author_fails() {
        assert!(CommentBuilder::new("").body("hi").build_reply().is_err());
    }
}
