//! Count command

use anyhow::Result;
use clap::Args;

use super::{parse_post, AppContext};

/// Count command arguments
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Post ID
    pub post: String,
}

/// Print comments plus replies for a post
pub fn execute(ctx: &AppContext, args: CountArgs) -> Result<()> {
    let post_id = parse_post(&args.post)?;
    let storage = ctx.storage()?;
    let discussion = ctx.open(&storage, &post_id)?;

    println!("{}", discussion.total_count());
    Ok(())
}
