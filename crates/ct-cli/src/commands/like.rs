//! Like command
//!
//! Toggle the viewer's like on a comment or reply.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use super::{parse_post, AppContext};

/// Like command arguments
#[derive(Debug, Args)]
pub struct LikeArgs {
    /// Post ID
    pub post: String,

    /// ID (or unique prefix) of the comment or reply
    pub id: String,

    /// Owning comment, when addressing a reply explicitly
    #[arg(long)]
    pub parent: Option<String>,
}

/// Execute the like command
pub fn execute(ctx: &AppContext, args: LikeArgs) -> Result<()> {
    let post_id = parse_post(&args.post)?;
    let storage = ctx.storage()?;
    let mut discussion = ctx.open(&storage, &post_id)?;

    let target = discussion
        .thread()
        .resolve_prefix(&args.id)
        .with_context(|| format!("No comment '{}' on {}", args.id, post_id))?;

    let parent = match &args.parent {
        Some(raw) => {
            let parent = discussion
                .thread()
                .resolve_prefix(raw)
                .with_context(|| format!("No comment '{}' on {}", raw, post_id))?;
            if parent.parent.is_some() {
                bail!("--parent must name a top-level comment");
            }
            Some(parent.id)
        }
        None => target.parent.clone(),
    };

    let likes = discussion
        .toggle_like(&target.id, parent.as_ref())
        .with_context(|| format!("Cannot like {}", target.id.short()))?;
    ctx.save(&storage, &discussion)?;

    let (heart, verb) = if likes.is_liked() {
        ("♥".red(), "Liked")
    } else {
        ("♡".normal(), "Unliked")
    };
    println!(
        "{} {} {} ({} {})",
        heart,
        verb,
        target.id.short().cyan(),
        likes.count(),
        if likes.count() == 1 { "like" } else { "likes" }
    );
    Ok(())
}
