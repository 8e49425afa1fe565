//! Reply command
//!
//! Reply to a top-level comment, addressed by ID or unique ID prefix.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use ct_core::comment::Node;
use ct_core::CommentTreeError;

use super::{parse_post, AppContext};

/// Reply command arguments
#[derive(Debug, Args)]
pub struct ReplyArgs {
    /// Post ID
    pub post: String,

    /// ID (or unique prefix) of the comment to reply to
    pub parent: String,

    /// Reply text
    pub body: String,
}

/// Execute the reply command
pub fn execute(ctx: &AppContext, args: ReplyArgs) -> Result<()> {
    let post_id = parse_post(&args.post)?;
    let storage = ctx.storage()?;
    let mut discussion = ctx.open(&storage, &post_id)?;

    let target = discussion
        .thread()
        .resolve_prefix(&args.parent)
        .with_context(|| format!("No comment '{}' on {}", args.parent, post_id))?;
    if target.parent.is_some() {
        bail!(
            "{} is a reply; replies can only be added to top-level comments",
            target.id.short()
        );
    }

    discussion.composer_mut().toggle_reply_target(&target.id);
    discussion.composer_mut().set_reply_draft(args.body);

    let posted = match discussion.submit_reply() {
        Ok(posted) => posted,
        Err(CommentTreeError::CommentingDisabled) => {
            bail!("{} is not allowed to comment", discussion.viewer().name)
        }
        Err(e) => return Err(e.into()),
    };

    let Some(reply) = posted else {
        eprintln!("{} Nothing to post: reply is empty.", "⚠".yellow());
        return Ok(());
    };

    ctx.save(&storage, &discussion)?;
    println!(
        "{} Replied {} under {} ({})",
        "✓".green(),
        reply.id().short().cyan(),
        target.id.short(),
        discussion.header().dimmed()
    );
    Ok(())
}
