//! Discussion: one post's thread as seen by one viewer

use super::composer::Composer;
use crate::comment::{Comment, Likes, Reply, Thread, ThreadSettings};
use crate::config::{Config, ViewerConfig};
use crate::error::{CommentTreeError, Result};
use crate::types::{CommentId, PostId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The identity looking at a discussion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    /// Author name for new nodes
    pub name: String,
    /// Whether posting is allowed
    pub can_comment: bool,
}

impl Viewer {
    /// A viewer allowed to post
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            can_comment: true,
        }
    }

    /// A viewer who may read and like but not post
    pub fn read_only(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            can_comment: false,
        }
    }
}

impl From<&ViewerConfig> for Viewer {
    fn from(config: &ViewerConfig) -> Self {
        Self {
            name: config.name.clone(),
            can_comment: config.can_comment,
        }
    }
}

/// A post's thread bound to the current viewer and their drafts
#[derive(Debug, Clone)]
pub struct Discussion {
    post_id: PostId,
    viewer: Viewer,
    thread: Thread,
    composer: Composer,
}

impl Discussion {
    /// Open an empty discussion
    pub fn new(post_id: PostId, viewer: Viewer) -> Self {
        Self::with_thread(post_id, viewer, Thread::new())
    }

    /// Open a discussion over an existing thread
    pub fn with_thread(post_id: PostId, viewer: Viewer, thread: Thread) -> Self {
        Self {
            post_id,
            viewer,
            thread,
            composer: Composer::new(),
        }
    }

    /// Open a discussion with viewer and engine settings taken from `config`
    pub fn from_config(post_id: PostId, mut thread: Thread, config: &Config) -> Self {
        thread.set_settings(ThreadSettings::from(&config.comments));
        Self::with_thread(post_id, Viewer::from(&config.viewer), thread)
    }

    /// Post this discussion belongs to
    pub fn post_id(&self) -> &PostId {
        &self.post_id
    }

    /// Current viewer
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// The thread for rendering
    pub fn thread(&self) -> &Thread {
        &self.thread
    }

    /// Give up the discussion, keeping the thread
    pub fn into_thread(self) -> Thread {
        self.thread
    }

    /// Draft state
    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Mutable draft state
    pub fn composer_mut(&mut self) -> &mut Composer {
        &mut self.composer
    }

    fn ensure_can_comment(&self) -> Result<()> {
        if self.viewer.can_comment {
            Ok(())
        } else {
            debug!("{} tried to post on {} without permission", self.viewer.name, self.post_id);
            Err(CommentTreeError::CommentingDisabled)
        }
    }

    /// Post a top-level comment as the viewer
    pub fn comment(&mut self, body: &str) -> Result<Option<Comment>> {
        self.ensure_can_comment()?;
        self.thread.add_comment(&self.viewer.name, body)
    }

    /// Reply to a top-level comment as the viewer
    pub fn reply(&mut self, parent: &CommentId, body: &str) -> Result<Option<Reply>> {
        self.ensure_can_comment()?;
        self.thread.add_reply(parent, &self.viewer.name, body)
    }

    /// Toggle the viewer's like; allowed regardless of `can_comment`
    pub fn toggle_like(&mut self, target: &CommentId, parent: Option<&CommentId>) -> Result<Likes> {
        self.thread.toggle_like(target, parent)
    }

    /// Submit the comment draft, clearing it if a comment was created
    pub fn submit_comment(&mut self) -> Result<Option<Comment>> {
        let draft = self.composer.comment_draft().to_string();
        let comment = self.comment(&draft)?;
        if comment.is_some() {
            self.composer.clear_comment_draft();
        }
        Ok(comment)
    }

    /// Submit the reply draft under the selected comment.
    ///
    /// On success the draft is cleared and the reply form closed.
    pub fn submit_reply(&mut self) -> Result<Option<Reply>> {
        let parent = self.composer.replying_to().cloned().ok_or_else(|| {
            CommentTreeError::Validation("No comment selected to reply to".to_string())
        })?;
        let draft = self.composer.reply_draft().to_string();

        let reply = self.reply(&parent, &draft)?;
        if reply.is_some() {
            self.composer.finish_reply();
        }
        Ok(reply)
    }

    /// All comments and replies
    pub fn total_count(&self) -> usize {
        self.thread.total_count()
    }

    /// Title line with the total count
    pub fn header(&self) -> String {
        format!("Comments ({})", self.total_count())
    }
}
