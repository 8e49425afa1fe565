//! Markdown exporter for threads

use super::exporter::Exporter;
use crate::comment::{format_relative, Likes, Node, Thread};
use crate::error::Result;
use crate::types::PostId;
use chrono::{DateTime, Utc};

/// Shown in place of the list when a thread is empty
pub const EMPTY_TITLE: &str = "No comments yet";
/// Second line of the empty state
pub const EMPTY_HINT: &str = "Be the first to comment!";

/// Heart glyph plus count, filled when the viewer likes the node
pub(crate) fn like_badge(likes: Likes) -> String {
    let heart = if likes.is_liked() { '♥' } else { '♡' };
    format!("{} {}", heart, likes.count())
}

/// Append `body` with every line behind `prefix`, so user text cannot
/// open headings or rules of its own
fn push_quoted(out: &mut String, prefix: &str, body: &str) {
    for line in body.lines() {
        out.push_str(prefix);
        out.push_str(line);
        out.push('\n');
    }
}

/// Markdown exporter
pub struct MarkdownExporter {
    /// Show avatars before author names
    show_avatars: bool,
    /// Fixed "now" for relative times
    now: Option<DateTime<Utc>>,
}

impl MarkdownExporter {
    /// Create a new Markdown exporter with default settings
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

    fn render_meta(&self, node: &dyn Node, now: DateTime<Utc>) -> String {
        let avatar = if self.show_avatars {
            format!("{} ", node.display_avatar())
        } else {
            String::new()
        };
        format!(
            "{}**{}** · {} · {}",
            avatar,
            node.author(),
            format_relative(node.created_at(), now),
            like_badge(node.likes())
        )
    }

    /// Render the report header
    fn render_header(&self, post_id: &PostId, thread: &Thread) -> String {
        format!(
            "# Comments ({})\n\n**Post:** `{}`\n\n",
            thread.total_count(),
            post_id
        )
    }

    fn render_comments(&self, thread: &Thread, now: DateTime<Utc>) -> String {
        if thread.is_empty() {
            return format!("_{}_\n\n{}\n", EMPTY_TITLE, EMPTY_HINT);
        }

        let mut output = String::new();
        for comment in thread {
            output.push_str("---\n\n");
            output.push_str(&self.render_meta(comment, now));
            output.push_str("\n\n");
            push_quoted(&mut output, "> ", comment.body());

            for reply in comment.replies() {
                output.push_str(">\n> > ");
                output.push_str(&self.render_meta(reply, now));
                output.push_str("\n> >\n");
                push_quoted(&mut output, "> > ", reply.body());
            }
            output.push('\n');
        }
        output
    }
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for MarkdownExporter {
    fn export(&self, post_id: &PostId, thread: &Thread) -> Result<String> {
        let now = self.now.unwrap_or_else(Utc::now);
        let mut output = self.render_header(post_id, thread);
        output.push_str(&self.render_comments(thread, now));
        Ok(output)
    }

    fn format_name(&self) -> &str {
        "markdown"
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}
