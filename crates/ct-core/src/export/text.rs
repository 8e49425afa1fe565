//! Plain text tree for terminals

use super::exporter::Exporter;
use super::markdown::{like_badge, EMPTY_HINT, EMPTY_TITLE};
use crate::comment::{format_relative, Node, Thread};
use crate::error::Result;
use crate::types::PostId;
use chrono::{DateTime, Utc};

/// Indented text exporter with short IDs
pub struct TextExporter {
    show_avatars: bool,
    now: Option<DateTime<Utc>>,
}

impl TextExporter {
    /// Create a new text exporter
    pub fn new() -> Self {
        Self {
            show_avatars: true,
            now: None,
        }
    }

    /// Set whether to show avatars
    pub fn with_avatars(mut self, show: bool) -> Self {
        self.show_avatars = show;
        self
    }

    /// Render relative times against a fixed instant
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    fn render_node(&self, out: &mut String, node: &dyn Node, indent: &str, now: DateTime<Utc>) {
        let avatar = if self.show_avatars {
            format!("{} ", node.display_avatar())
        } else {
            String::new()
        };
        out.push_str(&format!(
            "{}[{}] {}{} · {} · {}\n",
            indent,
            node.id().short(),
            avatar,
            node.author(),
            format_relative(node.created_at(), now),
            like_badge(node.likes())
        ));
        for line in node.body().lines() {
            out.push_str(indent);
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
    }
}

impl Default for TextExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for TextExporter {
    fn export(&self, post_id: &PostId, thread: &Thread) -> Result<String> {
        let now = self.now.unwrap_or_else(Utc::now);
        let mut out = format!("Comments ({}) on {}\n", thread.total_count(), post_id);

        if thread.is_empty() {
            out.push_str(&format!("\n  {}\n  {}\n", EMPTY_TITLE, EMPTY_HINT));
            return Ok(out);
        }

        for comment in thread {
            out.push('\n');
            self.render_node(&mut out, comment, "", now);
            for reply in comment.replies() {
                self.render_node(&mut out, reply, "    ↳ ", now);
            }
        }
        Ok(out)
    }

    fn format_name(&self) -> &str {
        "text"
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}
