//! Thread engine: the ordered comment forest for one post
//!
//! Top-level comments are kept newest first, replies oldest first. The
//! top-level sequence sits behind an `Arc`; every mutation goes through
//! `Arc::make_mut`, so a [`Thread::snapshot`] taken earlier keeps seeing the
//! tree as it was.

use super::builder::CommentBuilder;
use super::model::{Comment, Likes, Node, Reply};
use super::validator::CommentValidator;
use crate::config::CommentsConfig;
use crate::error::{CommentTreeError, Result};
use crate::types::CommentId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Engine settings derived from configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadSettings {
    /// Body validation rules
    pub validator: CommentValidator,
    /// Avatar stamped on nodes created through the engine
    pub default_avatar: Option<String>,
}

impl From<&CommentsConfig> for ThreadSettings {
    fn from(config: &CommentsConfig) -> Self {
        Self {
            validator: CommentValidator::with_limit(config.max_body_length),
            default_avatar: Some(config.default_avatar.clone()),
        }
    }
}

/// Location of a node found by [`Thread::resolve_prefix`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    /// The node's own ID
    pub id: CommentId,
    /// Owning comment, for replies
    pub parent: Option<CommentId>,
}

/// The comment forest for one discussion context
#[derive(Debug, Clone, Default, Serialize)]
pub struct Thread {
    /// Newest first
    comments: Arc<Vec<Comment>>,
    #[serde(skip)]
    revision: u64,
    #[serde(skip)]
    settings: ThreadSettings,
}

impl Thread {
    /// Create an empty thread with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty thread with explicit settings
    pub fn with_settings(settings: ThreadSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Create a thread from existing comments, in display order.
    ///
    /// Fails if any ID appears twice anywhere in the forest.
    pub fn from_comments(comments: Vec<Comment>) -> Result<Self> {
        let mut seen = HashSet::new();
        for comment in &comments {
            let ids = std::iter::once(comment.id()).chain(comment.replies.iter().map(|r| r.id()));
            for id in ids {
                if !seen.insert(id.clone()) {
                    return Err(CommentTreeError::Validation(format!(
                        "Comment with ID {} already exists",
                        id
                    )));
                }
            }
        }

        Ok(Self {
            comments: Arc::new(comments),
            ..Self::default()
        })
    }

    /// Replace the engine settings, keeping the tree
    pub fn set_settings(&mut self, settings: ThreadSettings) {
        self.settings = settings;
    }

    /// Current engine settings
    pub fn settings(&self) -> &ThreadSettings {
        &self.settings
    }

    /// Add a top-level comment, prepending it to the thread.
    ///
    /// An empty or whitespace-only body is skipped and returns `Ok(None)`.
    pub fn add_comment(&mut self, author: &str, body: &str) -> Result<Option<Comment>> {
        let Some(body) = self.settings.validator.normalize_body(body)? else {
            debug!("Skipping empty comment from {}", author);
            return Ok(None);
        };
        self.settings.validator.validate_author(author)?;

        let comment = CommentBuilder::new(author)
            .body(body)
            .maybe_avatar(self.settings.default_avatar.clone())
            .build()?;

        Arc::make_mut(&mut self.comments).insert(0, comment.clone());
        self.revision += 1;

        debug!(
            "Added comment {} by {} ({} nodes)",
            comment.id(),
            author,
            self.total_count()
        );
        Ok(Some(comment))
    }

    /// Append a reply to the top-level comment `parent`.
    ///
    /// The parent is resolved before the body is looked at, so an unknown
    /// parent is reported even for an empty body.
    pub fn add_reply(
        &mut self,
        parent: &CommentId,
        author: &str,
        body: &str,
    ) -> Result<Option<Reply>> {
        let index = self.position(parent)?;

        let Some(body) = self.settings.validator.normalize_body(body)? else {
            debug!("Skipping empty reply to {} from {}", parent, author);
            return Ok(None);
        };
        self.settings.validator.validate_author(author)?;

        let reply = CommentBuilder::new(author)
            .body(body)
            .maybe_avatar(self.settings.default_avatar.clone())
            .build_reply()?;

        Arc::make_mut(&mut self.comments)[index]
            .replies
            .push(reply.clone());
        self.revision += 1;

        debug!("Added reply {} to {} by {}", reply.id(), parent, author);
        Ok(Some(reply))
    }

    /// Toggle the viewer's like on a node and return the new like state.
    ///
    /// `parent` is `None` for a top-level comment and the owning comment's ID
    /// for a reply. Nothing changes if either ID does not resolve or the
    /// count is already at its maximum.
    pub fn toggle_like(&mut self, target: &CommentId, parent: Option<&CommentId>) -> Result<Likes> {
        let likes = match parent {
            None => {
                let index = self.position(target)?;
                let likes = self.comments[index].likes.toggled()?;
                Arc::make_mut(&mut self.comments)[index].likes = likes;
                likes
            }
            Some(parent) => {
                let index = self.position(parent)?;
                let reply_index = self.comments[index]
                    .replies
                    .iter()
                    .position(|r| &r.id == target)
                    .ok_or_else(|| {
                        warn!("Reply {} not found under {}", target, parent);
                        CommentTreeError::ReplyNotFound {
                            parent: parent.to_string(),
                            reply: target.to_string(),
                        }
                    })?;
                let likes = self.comments[index].replies[reply_index].likes.toggled()?;
                Arc::make_mut(&mut self.comments)[index].replies[reply_index].likes = likes;
                likes
            }
        };
        self.revision += 1;

        debug!(
            "Toggled like on {}: liked={} count={}",
            target,
            likes.is_liked(),
            likes.count()
        );
        Ok(likes)
    }

    fn position(&self, id: &CommentId) -> Result<usize> {
        self.comments.iter().position(|c| &c.id == id).ok_or_else(|| {
            warn!("Comment {} not found", id);
            CommentTreeError::CommentNotFound(id.to_string())
        })
    }

    /// Every top-level comment plus every reply, recomputed on each call
    pub fn total_count(&self) -> usize {
        self.comments.iter().map(Comment::node_count).sum()
    }

    /// Top-level comments, newest first
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Share the current tree without copying it
    pub fn snapshot(&self) -> Arc<Vec<Comment>> {
        Arc::clone(&self.comments)
    }

    /// Iterate top-level comments
    pub fn iter(&self) -> std::slice::Iter<'_, Comment> {
        self.comments.iter()
    }

    /// Get a top-level comment by ID
    pub fn get(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| &c.id == id)
    }

    /// Get a reply by its parent and own ID
    pub fn get_reply(&self, parent: &CommentId, id: &CommentId) -> Option<&Reply> {
        self.get(parent)?.reply(id)
    }

    /// Find which top-level comment owns a reply
    pub fn parent_of(&self, reply: &CommentId) -> Option<&CommentId> {
        self.comments
            .iter()
            .find(|c| c.reply(reply).is_some())
            .map(|c| c.id())
    }

    /// Find the single node whose ID starts with `prefix`
    pub fn resolve_prefix(&self, prefix: &str) -> Result<NodeRef> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Err(CommentTreeError::Validation("ID prefix cannot be empty".to_string()));
        }

        let mut matches = Vec::new();
        for comment in self.comments.iter() {
            if comment.id.to_string().starts_with(&prefix) {
                matches.push(NodeRef {
                    id: comment.id.clone(),
                    parent: None,
                });
            }
            for reply in &comment.replies {
                if reply.id.to_string().starts_with(&prefix) {
                    matches.push(NodeRef {
                        id: reply.id.clone(),
                        parent: Some(comment.id.clone()),
                    });
                }
            }
        }

        match matches.len() {
            0 => Err(CommentTreeError::CommentNotFound(prefix)),
            1 => Ok(matches.remove(0)),
            n => Err(CommentTreeError::Validation(format!(
                "ID prefix {} is ambiguous ({} matches)",
                prefix, n
            ))),
        }
    }

    /// Number of top-level comments
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Incremented by every successful mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<'a> IntoIterator for &'a Thread {
    type Item = &'a Comment;
    type IntoIter = std::slice::Iter<'a, Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Custom deserialization to re-check ID uniqueness
impl<'de> serde::de::Deserialize<'de> for Thread {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ThreadHelper {
            #[serde(default)]
            comments: Vec<Comment>,
        }

        let helper = ThreadHelper::deserialize(deserializer)?;
        Thread::from_comments(helper.comments).map_err(serde::de::Error::custom)
    }
}
