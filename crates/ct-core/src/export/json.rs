//! JSON exporter

use super::exporter::Exporter;
use crate::comment::{Comment, Thread};
use crate::error::Result;
use crate::types::PostId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Exported document
#[derive(Debug, Serialize)]
pub struct ExportData<'a> {
    /// Post the thread belongs to
    pub post_id: &'a PostId,
    /// Export time
    pub exported_at: DateTime<Utc>,
    /// Comments plus replies
    pub total_count: usize,
    /// Top-level comments, newest first, each with its replies
    pub comments: &'a [Comment],
}

/// JSON exporter
pub struct JsonExporter {
    compact: bool,
}

impl JsonExporter {
    /// Create a JSON exporter; `compact` drops whitespace
    pub fn new(compact: bool) -> Self {
        Self { compact }
    }

    /// Compact JSON exporter
    pub fn compact() -> Self {
        Self::new(true)
    }
}

impl Exporter for JsonExporter {
    fn export(&self, post_id: &PostId, thread: &Thread) -> Result<String> {
        let data = ExportData {
            post_id,
            exported_at: Utc::now(),
            total_count: thread.total_count(),
            comments: thread.comments(),
        };

        let json = if self.compact {
            serde_json::to_string(&data)?
        } else {
            serde_json::to_string_pretty(&data)?
        };
        Ok(json)
    }

    fn format_name(&self) -> &str {
        if self.compact {
            "json-compact"
        } else {
            "json"
        }
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::Node;

    fn create_thread() -> Thread {
        let mut thread = Thread::new();
        let root = thread.add_comment("alice", "hello").unwrap().unwrap();
        thread.add_reply(root.id(), "bob", "hi back").unwrap();
        thread
    }

    #[test]
    fn test_json_structure() {
        let post = PostId::from_string("post-1").unwrap();
        let json = JsonExporter::new(false).export(&post, &create_thread()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["post_id"], "post-1");
        assert_eq!(value["total_count"], 2);
        assert_eq!(value["comments"][0]["author"], "alice");
        assert_eq!(value["comments"][0]["replies"][0]["body"], "hi back");
        assert_eq!(value["comments"][0]["likes"]["count"], 0);
    }

    #[test]
    fn test_compact_has_no_newlines() {
        let post = PostId::from_string("post-1").unwrap();
        let exporter = JsonExporter::compact();
        let json = exporter.export(&post, &create_thread()).unwrap();

        assert!(!json.contains('\n'));
        assert_eq!(exporter.format_name(), "json-compact");
    }
}
