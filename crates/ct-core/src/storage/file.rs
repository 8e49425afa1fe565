//! Thread file format and schema version check

use crate::comment::{Node, Thread};
use crate::error::{CommentTreeError, Result};
use crate::types::{PostId, SchemaVersion};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current schema version
pub const CURRENT_SCHEMA_VERSION: &str = "1.0";

/// On-disk envelope for one post's thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadFile {
    /// Schema version for compatibility checks
    pub schema_version: String,
    /// Post the thread belongs to
    pub post_id: PostId,
    /// When the file was written
    pub saved_at: DateTime<Utc>,
    /// The thread data
    pub thread: Thread,
    /// Extra fields for forward compatibility
    #[serde(flatten, default)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ThreadFile {
    /// Wrap a thread with the current schema version
    pub fn new(post_id: PostId, thread: Thread) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION.to_string(),
            post_id,
            saved_at: Utc::now(),
            thread,
            extra: HashMap::new(),
        }
    }

    /// Reject files written by an incompatible major version
    pub fn check_version(&self) -> Result<()> {
        let version = SchemaVersion::parse(&self.schema_version)
            .ok_or_else(|| CommentTreeError::UnsupportedSchemaVersion(self.schema_version.clone()))?;

        if !version.is_compatible(&SchemaVersion::V1_0) {
            return Err(CommentTreeError::UnsupportedSchemaVersion(
                self.schema_version.clone(),
            ));
        }
        Ok(())
    }

    /// Summary for listing
    pub fn info(&self) -> ThreadInfo {
        ThreadInfo::new(self.post_id.clone(), self.saved_at, &self.thread)
    }

    /// Get the thread, consuming the file
    pub fn into_thread(self) -> Thread {
        self.thread
    }
}

/// Thread summary information (for listing)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadInfo {
    /// Post ID
    pub post_id: PostId,
    /// Last save time
    pub saved_at: DateTime<Utc>,
    /// Number of top-level comments
    pub comment_count: usize,
    /// Comments plus replies
    pub total_count: usize,
    /// Newest node creation time
    pub latest_activity: Option<DateTime<Utc>>,
}

impl ThreadInfo {
    /// Summarize a thread
    pub fn new(post_id: PostId, saved_at: DateTime<Utc>, thread: &Thread) -> Self {
        let latest_activity = thread
            .iter()
            .flat_map(|c| {
                std::iter::once(c.created_at()).chain(c.replies().iter().map(|r| r.created_at()))
            })
            .max();

        Self {
            post_id,
            saved_at,
            comment_count: thread.len(),
            total_count: thread.total_count(),
            latest_activity,
        }
    }
}
