//! Configuration management for comment-tree

use crate::error::{CommentTreeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Comment settings
    pub comments: CommentsConfig,
    /// Viewing identity
    pub viewer: ViewerConfig,
    /// Display settings
    pub display: DisplayConfig,
    /// Storage settings
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults if absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| e.with_context(format!("Failed to load {}", path.display())))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| CommentTreeError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration as TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CommentTreeError::Toml(e.to_string()))?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Check settings for values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.comments.max_body_length == Some(0) {
            return Err(CommentTreeError::Config(
                "comments.max_body_length must be greater than zero".to_string(),
            ));
        }
        if self.viewer.name.trim().is_empty() {
            return Err(CommentTreeError::Config(
                "viewer.name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Comment-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    /// Optional maximum body length in characters, after trimming
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_body_length: Option<usize>,
    /// Avatar stamped on comments created in this session
    pub default_avatar: String,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            max_body_length: None,
            default_avatar: "🚀".to_string(),
        }
    }
}

/// Who is looking at the discussion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Identity used as author for new comments
    pub name: String,
    /// Whether the viewer may post
    pub can_comment: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            name: "guest".to_string(),
            can_comment: true,
        }
    }
}

/// Display-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show avatars next to authors
    pub show_avatars: bool,
    /// Default output format for `show`
    pub default_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_avatars: true,
            default_format: "markdown".to_string(),
        }
    }
}

/// Storage-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the thread data directory
    pub data_dir: Option<PathBuf>,
}
