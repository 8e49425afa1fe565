//! Delete command

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use ct_core::storage::ThreadStorage;

use super::{parse_post, AppContext};

/// Delete command arguments
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Post ID
    pub post: String,

    /// Skip confirmation
    #[arg(long, short)]
    pub yes: bool,
}

/// Execute the delete command
pub fn execute(ctx: &AppContext, args: DeleteArgs) -> Result<()> {
    let post_id = parse_post(&args.post)?;
    let storage = ctx.storage()?;

    let thread = storage
        .load(&post_id)
        .with_context(|| format!("Discussion '{}' not found", post_id))?;

    if !args.yes {
        use dialoguer::Confirm;

        println!("Discussion: {}", post_id.to_string().green());
        println!(
            "  {} comments, {} total",
            thread.len(),
            thread.total_count()
        );

        let confirmed = Confirm::new()
            .with_prompt("Delete this discussion?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    storage.delete(&post_id)?;
    println!("{} Discussion '{}' deleted.", "✓".green(), post_id);

    Ok(())
}
