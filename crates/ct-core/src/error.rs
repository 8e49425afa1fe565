//! Error types for comment-tree

use thiserror::Error;

/// Main error type for comment-tree
#[derive(Debug, Error)]
pub enum CommentTreeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// No stored thread for a post
    #[error("Thread not found for post: {0}")]
    ThreadNotFound(String),

    /// Top-level comment not found
    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    /// Parent resolved but the reply did not
    #[error("Reply {reply} not found under comment {parent}")]
    ReplyNotFound { parent: String, reply: String },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Body exceeds the configured limit
    #[error("Comment body is {length} characters, maximum is {max}")]
    BodyTooLong { length: usize, max: usize },

    /// The viewer is not allowed to post
    #[error("Commenting is disabled for this viewer")]
    CommentingDisabled,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unsupported schema version
    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CommentTreeError>,
    },
}

impl CommentTreeError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CommentTreeError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error means an id did not resolve
    pub fn is_not_found(&self) -> bool {
        match self {
            CommentTreeError::CommentNotFound(_) | CommentTreeError::ReplyNotFound { .. } => true,
            CommentTreeError::WithContext { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

/// Result type alias for comment-tree
pub type Result<T> = std::result::Result<T, CommentTreeError>;
