//! Show command
//!
//! Render a post's discussion in any export format.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use ct_core::export::ExportManager;
use ct_core::storage::ThreadStorage;
use std::path::PathBuf;

use super::{parse_post, AppContext};

/// Show command arguments
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Post ID
    pub post: String,

    /// Output format (json, json-compact, markdown, text)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Hide avatars
    #[arg(long)]
    pub no_avatars: bool,
}

/// Execute the show command
pub fn execute(ctx: &AppContext, args: ShowArgs) -> Result<()> {
    let post_id = parse_post(&args.post)?;
    let storage = ctx.storage()?;
    let thread = storage
        .load_or_default(&post_id)
        .with_context(|| format!("Failed to load discussion for '{}'", post_id))?;

    let show_avatars = ctx.config.display.show_avatars && !args.no_avatars;
    let manager = ExportManager::with_avatars(show_avatars);

    let format = args
        .format
        .unwrap_or_else(|| ctx.config.display.default_format.clone());
    if !manager.has_format(&format) {
        bail!(
            "Unknown format '{}'. Available: {}",
            format,
            manager.available_formats().join(", ")
        );
    }

    match args.output {
        Some(path) => {
            manager
                .export_to_file(&post_id, &thread, &format, &path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} Exported {} ({}) to {}",
                "✓".green(),
                post_id,
                format,
                path.display()
            );
        }
        None => {
            let content = manager.export(&post_id, &thread, &format)?;
            println!("{}", content.trim_end());
        }
    }

    Ok(())
}
