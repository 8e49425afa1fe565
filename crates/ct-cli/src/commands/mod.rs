//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod comment;
pub mod config;
pub mod count;
pub mod delete;
pub mod like;
pub mod list;
pub mod reply;
pub mod seed;
pub mod show;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ct_core::config::Config;
use ct_core::discussion::Discussion;
use ct_core::storage::ThreadStorage;
use ct_core::types::PostId;
use ct_storage::FileSystemStorage;
use std::path::PathBuf;
use tracing::debug;

/// comment-tree - threaded comments with likes
#[derive(Debug, Parser)]
#[command(name = "comment-tree")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding saved threads
    #[arg(long, global = true, env = "COMMENT_TREE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Act as this viewer instead of the configured one
    #[arg(short, long, global = true, env = "COMMENT_TREE_USER")]
    pub user: Option<String>,

    /// View without permission to post
    #[arg(long, global = true)]
    pub read_only: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a post's discussion
    Show(show::ShowArgs),

    /// Print the number of comments plus replies
    Count(count::CountArgs),

    /// Post a top-level comment
    Comment(comment::CommentArgs),

    /// Reply to a top-level comment
    Reply(reply::ReplyArgs),

    /// Toggle the viewer's like on a comment or reply
    Like(like::LikeArgs),

    /// Load the sample discussion into a post
    Seed(seed::SeedArgs),

    /// List stored discussions
    List(list::ListArgs),

    /// Delete a post's discussion
    Delete(delete::DeleteArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let ctx = AppContext::from_cli(&cli)?;

    // Dispatch to command handler
    match cli.command {
        Commands::Show(args) => show::execute(&ctx, args),
        Commands::Count(args) => count::execute(&ctx, args),
        Commands::Comment(args) => comment::execute(&ctx, args),
        Commands::Reply(args) => reply::execute(&ctx, args),
        Commands::Like(args) => like::execute(&ctx, args),
        Commands::Seed(args) => seed::execute(&ctx, args),
        Commands::List(args) => list::execute(&ctx, args),
        Commands::Delete(args) => delete::execute(&ctx, args),
        Commands::Config(cmd) => config::execute(&ctx, cmd),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Default configuration file location
pub fn default_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "comment-tree", "comment-tree")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".comment-tree")
                .join("config.toml")
        })
}

/// Settings resolved from the config file and global flags
pub struct AppContext {
    /// Effective configuration, flags applied
    pub config: Config,
    /// Where the configuration was read from
    pub config_path: PathBuf,
    /// Where threads are stored
    pub data_dir: PathBuf,
}

impl AppContext {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = cli.config.clone().unwrap_or_else(default_config_path);
        let mut config = Config::load(&config_path)
            .with_context(|| format!("Invalid configuration at {}", config_path.display()))?;

        if let Some(user) = &cli.user {
            config.viewer.name = user.clone();
        }
        if cli.read_only {
            config.viewer.can_comment = false;
        }
        config.validate().context("Invalid viewer")?;

        let data_dir = cli
            .data_dir
            .clone()
            .or_else(|| config.storage.data_dir.clone())
            .unwrap_or_else(FileSystemStorage::default_dir);

        debug!("Config {:?}, data dir {:?}", config_path, data_dir);

        Ok(Self {
            config,
            config_path,
            data_dir,
        })
    }

    /// Open thread storage, creating the data directory if needed
    pub fn storage(&self) -> Result<FileSystemStorage> {
        FileSystemStorage::new(&self.data_dir)
            .with_context(|| format!("Cannot open data directory {}", self.data_dir.display()))
    }

    /// Open a post's discussion as the current viewer; absent threads start empty
    pub fn open(&self, storage: &FileSystemStorage, post_id: &PostId) -> Result<Discussion> {
        let thread = storage
            .load_or_default(post_id)
            .with_context(|| format!("Failed to load discussion for '{}'", post_id))?;
        Ok(Discussion::from_config(post_id.clone(), thread, &self.config))
    }

    /// Write a discussion's thread back
    pub fn save(&self, storage: &FileSystemStorage, discussion: &Discussion) -> Result<()> {
        storage
            .save(discussion.post_id(), discussion.thread())
            .with_context(|| format!("Failed to save discussion for '{}'", discussion.post_id()))
    }
}

/// Parse a post ID argument
pub fn parse_post(raw: &str) -> Result<PostId> {
    PostId::from_string(raw).with_context(|| format!("Invalid post ID: {:?}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "comment-tree",
            "comment",
            "post-1",
            "hello",
            "--user",
            "sam",
            "--data-dir",
            "/tmp/ct",
        ])
        .unwrap();

        assert_eq!(cli.user.as_deref(), Some("sam"));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/ct")));
        assert!(matches!(cli.command, Commands::Comment(_)));
    }

    #[test]
    fn test_parse_post_rejects_empty() {
        assert!(parse_post("").is_err());
        assert_eq!(parse_post("post-1").unwrap().as_str(), "post-1");
    }

    #[test]
    fn test_default_config_path_name() {
        assert!(default_config_path().ends_with("config.toml"));
    }
}
