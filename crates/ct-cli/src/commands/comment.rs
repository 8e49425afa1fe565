//! Comment command
//!
//! Post a top-level comment as the current viewer.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use ct_core::comment::Node;
use ct_core::CommentTreeError;

use super::{parse_post, AppContext};

/// Comment command arguments
#[derive(Debug, Args)]
pub struct CommentArgs {
    /// Post ID
    pub post: String,

    /// Comment text
    pub body: String,
}

/// Execute the comment command
pub fn execute(ctx: &AppContext, args: CommentArgs) -> Result<()> {
    let post_id = parse_post(&args.post)?;
    let storage = ctx.storage()?;
    let mut discussion = ctx.open(&storage, &post_id)?;

    discussion.composer_mut().set_comment_draft(args.body);
    let posted = match discussion.submit_comment() {
        Ok(posted) => posted,
        Err(CommentTreeError::CommentingDisabled) => {
            anyhow::bail!("{} is not allowed to comment", discussion.viewer().name)
        }
        Err(e) => return Err(e.into()),
    };

    let Some(comment) = posted else {
        eprintln!("{} Nothing to post: comment is empty.", "⚠".yellow());
        return Ok(());
    };

    ctx.save(&storage, &discussion)?;
    println!(
        "{} Posted comment {} on {} ({})",
        "✓".green(),
        comment.id().short().cyan(),
        post_id,
        discussion.header().dimmed()
    );
    Ok(())
}
