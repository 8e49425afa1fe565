//! List command
//!
//! List stored discussions, most recently saved first.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use ct_core::comment::format_relative;
use ct_core::storage::ThreadStorage;

use super::AppContext;

/// List command arguments
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Limit number of discussions
    #[arg(long, short, default_value = "20")]
    pub limit: usize,
}

/// Execute the list command
pub fn execute(ctx: &AppContext, args: ListArgs) -> Result<()> {
    let storage = ctx.storage()?;
    let threads = storage.list()?;
    let total = threads.len();

    if threads.is_empty() {
        println!("No discussions found.");
        return Ok(());
    }

    let threads: Vec<_> = threads.into_iter().take(args.limit).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&threads)?);
        return Ok(());
    }

    println!("{}", "Discussions:".bold().underline());
    println!();

    let now = chrono::Utc::now();
    for info in &threads {
        let activity = info
            .latest_activity
            .map(|t| format_relative(t, now))
            .unwrap_or_else(|| "no activity".to_string());

        println!(
            "  {} {} comments, {} total ({})",
            info.post_id.to_string().green(),
            info.comment_count.to_string().cyan(),
            info.total_count.to_string().yellow(),
            activity.dimmed()
        );
    }

    if total > args.limit {
        println!(
            "\n  {} Showing {} of {} discussions. Use --limit to show more.",
            "ℹ".blue(),
            args.limit,
            total
        );
    }

    Ok(())
}
