//! Comment data models
//!
//! Nesting depth is fixed at two: a [`Comment`] owns its [`Reply`] list and a
//! `Reply` has no reply list at all.

use crate::error::{CommentTreeError, Result};
use crate::types::CommentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Avatar shown when a node carries none
pub const FALLBACK_AVATAR: &str = "👤";

/// Read access shared by comments and replies
pub trait Node {
    /// Unique identifier
    fn id(&self) -> &CommentId;
    /// Identity of the posting user
    fn author(&self) -> &str;
    /// Trimmed body text
    fn body(&self) -> &str;
    /// Creation time
    fn created_at(&self) -> DateTime<Utc>;
    /// Avatar, if one was recorded
    fn avatar(&self) -> Option<&str>;
    /// Like state as seen by the current viewer
    fn likes(&self) -> Likes;

    /// Avatar with the fallback applied
    fn display_avatar(&self) -> &str {
        self.avatar().unwrap_or(FALLBACK_AVATAR)
    }
}

/// A top-level comment in a thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub(crate) id: CommentId,
    pub(crate) author: String,
    pub(crate) body: String,
    pub(crate) created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) avatar: Option<String>,
    #[serde(default)]
    pub(crate) likes: Likes,
    /// Oldest first
    #[serde(default)]
    pub(crate) replies: Vec<Reply>,
}

impl Comment {
    /// Replies in the order they were added
    pub fn replies(&self) -> &[Reply] {
        &self.replies
    }

    /// Find a reply by ID
    pub fn reply(&self, id: &CommentId) -> Option<&Reply> {
        self.replies.iter().find(|r| &r.id == id)
    }

    /// This comment plus its replies
    pub fn node_count(&self) -> usize {
        1 + self.replies.len()
    }
}

impl Node for Comment {
    fn id(&self) -> &CommentId {
        &self.id
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn body(&self) -> &str {
        &self.body
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    fn likes(&self) -> Likes {
        self.likes
    }
}

/// A reply attached to exactly one top-level comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub(crate) id: CommentId,
    pub(crate) author: String,
    pub(crate) body: String,
    pub(crate) created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) avatar: Option<String>,
    #[serde(default)]
    pub(crate) likes: Likes,
}

impl Node for Reply {
    fn id(&self) -> &CommentId {
        &self.id
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn body(&self) -> &str {
        &self.body
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    fn likes(&self) -> Likes {
        self.likes
    }
}

/// Like counter paired with the current viewer's own like flag
///
/// There is a single virtual liker, so `count` moves by exactly one per
/// toggle and always includes the viewer's contribution while `liked_by_viewer`
/// is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LikesRepr")]
pub struct Likes {
    count: u32,
    liked_by_viewer: bool,
}

#[derive(Deserialize)]
struct LikesRepr {
    #[serde(default)]
    count: u32,
    #[serde(default)]
    liked_by_viewer: bool,
}

impl From<LikesRepr> for Likes {
    fn from(repr: LikesRepr) -> Self {
        Likes::new(repr.count, repr.liked_by_viewer)
    }
}

impl Likes {
    /// Create like state, raising `count` to 1 if the viewer's like is set
    pub fn new(count: u32, liked_by_viewer: bool) -> Self {
        let count = if liked_by_viewer { count.max(1) } else { count };
        Self {
            count,
            liked_by_viewer,
        }
    }

    /// Total likes
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether the current viewer likes this node
    pub fn is_liked(&self) -> bool {
        self.liked_by_viewer
    }

    /// Like state after one toggle, without changing `self`.
    ///
    /// Fails if liking would push the count past `u32::MAX`.
    pub fn toggled(&self) -> Result<Likes> {
        let count = if self.liked_by_viewer {
            self.count.saturating_sub(1)
        } else {
            self.count.checked_add(1).ok_or_else(|| {
                CommentTreeError::Validation("Like count is at its maximum".to_string())
            })?
        };
        Ok(Self {
            count,
            liked_by_viewer: !self.liked_by_viewer,
        })
    }

    /// Flip the viewer's like and adjust the count by one
    pub fn toggle(&mut self) -> Result<Likes> {
        *self = self.toggled()?;
        Ok(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_comment() -> Comment {
        Comment {
            id: CommentId::new(),
            author: "iris".to_string(),
            body: "Great post".to_string(),
            created_at: Utc::now(),
            avatar: None,
            likes: Likes::new(5, false),
            replies: vec![Reply {
                id: CommentId::new(),
                author: "noobgamer2024".to_string(),
                body: "Agreed".to_string(),
                created_at: Utc::now(),
                avatar: Some("🎮".to_string()),
                likes: Likes::new(2, true),
            }],
        }
    }

    #[test]
    fn test_node_accessors() {
        let comment = create_test_comment();
        assert_eq!(comment.author(), "iris");
        assert_eq!(comment.body(), "Great post");
        assert_eq!(comment.display_avatar(), FALLBACK_AVATAR);
        assert_eq!(comment.node_count(), 2);

        let reply = &comment.replies()[0];
        assert_eq!(reply.display_avatar(), "🎮");
        assert!(comment.reply(reply.id()).is_some());
        assert!(comment.reply(&CommentId::new()).is_none());
    }

    #[test]
    fn test_likes_toggle_pair_restores_state() {
        let mut likes = Likes::new(3, false);
        let after = likes.toggle().unwrap();
        assert_eq!(after.count(), 4);
        assert!(after.is_liked());

        likes.toggle().unwrap();
        assert_eq!(likes, Likes::new(3, false));
    }

    #[test]
    fn test_likes_toggle_at_max_count_is_rejected() {
        let mut likes = Likes::new(u32::MAX, false);
        assert!(matches!(likes.toggle(), Err(CommentTreeError::Validation(_))));
        assert_eq!(likes, Likes::new(u32::MAX, false));

        // Liked at the maximum still round-trips
        let mut likes = Likes::new(u32::MAX, true);
        likes.toggle().unwrap();
        likes.toggle().unwrap();
        assert_eq!(likes, Likes::new(u32::MAX, true));
    }

    #[test]
    fn test_likes_new_normalizes_liked_zero() {
        let likes = Likes::new(0, true);
        assert_eq!(likes.count(), 1);

        let mut likes = likes;
        likes.toggle().unwrap();
        assert_eq!(likes.count(), 0);
        assert!(!likes.is_liked());
    }

    #[test]
    fn test_likes_deserialize_normalizes() {
        let likes: Likes = serde_json::from_str(r#"{"count":0,"liked_by_viewer":true}"#).unwrap();
        assert_eq!(likes.count(), 1);

        let likes: Likes = serde_json::from_str("{}").unwrap();
        assert_eq!(likes, Likes::default());
    }

    #[test]
    fn test_reply_has_no_replies_field() {
        let comment = create_test_comment();
        let json = serde_json::to_value(&comment.replies()[0]).unwrap();
        assert!(json.get("replies").is_none());

        let json = serde_json::to_value(&comment).unwrap();
        assert!(json.get("replies").is_some());
    }

    #[test]
    fn test_comment_serialization() {
        let comment = create_test_comment();
        let json = serde_json::to_string(&comment).unwrap();
        let comment2: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(comment, comment2);
    }
}
