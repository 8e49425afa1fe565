//! Seed command
//!
//! Pre-populate a post with the sample discussion.

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use ct_core::seed::demo_thread;
use ct_core::storage::ThreadStorage;
use tracing::info;

use super::{parse_post, AppContext};

/// Seed command arguments
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Post ID
    pub post: String,

    /// Overwrite an existing discussion
    #[arg(long, short)]
    pub force: bool,
}

/// Execute the seed command
pub fn execute(ctx: &AppContext, args: SeedArgs) -> Result<()> {
    let post_id = parse_post(&args.post)?;
    let storage = ctx.storage()?;

    if storage.exists(&post_id) && !args.force {
        bail!(
            "'{}' already has a discussion. Use --force to replace it.",
            post_id
        );
    }

    let thread = demo_thread(chrono::Utc::now())?;
    storage.save(&post_id, &thread)?;
    info!("Seeded {} with {} nodes", post_id, thread.total_count());

    println!(
        "{} Seeded {} with {} comments and replies.",
        "✓".green(),
        post_id.to_string().cyan(),
        thread.total_count()
    );
    Ok(())
}
