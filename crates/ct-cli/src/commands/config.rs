//! Config command
//!
//! Manage comment-tree configuration.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use colored::Colorize;
use ct_core::config::Config;

use super::AppContext;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

/// Execute the config command
pub fn execute(ctx: &AppContext, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(ctx, json),
        ConfigCommand::Init { force } => init_config(ctx, force),
        ConfigCommand::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
    }
}

fn show_config(ctx: &AppContext, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&ctx.config)?);
        return Ok(());
    }

    let source = if ctx.config_path.exists() {
        ctx.config_path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", ctx.config_path.display())
    };

    println!("{}", "Configuration:".bold().underline());
    println!("{}", source.dimmed());
    println!();
    println!("[comments]");
    match ctx.config.comments.max_body_length {
        Some(max) => println!("  max_body_length = {}", max),
        None => println!("  max_body_length = {}", "unlimited".dimmed()),
    }
    println!("  default_avatar  = {}", ctx.config.comments.default_avatar);
    println!("[viewer]");
    println!("  name        = {}", ctx.config.viewer.name.cyan());
    println!("  can_comment = {}", ctx.config.viewer.can_comment);
    println!("[display]");
    println!("  show_avatars   = {}", ctx.config.display.show_avatars);
    println!("  default_format = {}", ctx.config.display.default_format);
    println!("[storage]");
    println!("  data_dir = {}", ctx.data_dir.display());

    Ok(())
}

fn init_config(ctx: &AppContext, force: bool) -> Result<()> {
    let path = &ctx.config_path;

    if path.exists() && !force {
        bail!(
            "Configuration already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    Config::default()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{} Wrote default configuration to {}",
        "✓".green(),
        path.display()
    );
    Ok(())
}
