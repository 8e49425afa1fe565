//! Core type definitions for comment-tree

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a comment or reply
///
/// Top-level comments and replies share one namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub Uuid);

impl CommentId {
    /// Generate a new CommentId
    pub fn new() -> Self {
        CommentId(Uuid::new_v4())
    }

    /// Create from UUID string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(CommentId(Uuid::parse_str(s)?))
    }

    /// Short prefix for terminal display
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the discussion context a thread belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub String);

impl PostId {
    /// Create from a string with validation
    pub fn from_string(s: impl Into<String>) -> crate::Result<Self> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(crate::CommentTreeError::Validation(
                "Post ID cannot be empty".to_string(),
            ));
        }
        if s.chars().any(|c| c.is_control()) {
            return Err(crate::CommentTreeError::Validation(format!(
                "Invalid post ID: {:?}",
                s
            )));
        }
        Ok(PostId(s))
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Schema version for thread files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaVersion {
    pub major: u32,
    pub minor: u32,
}

impl SchemaVersion {
    pub const V1_0: Self = Self { major: 1, minor: 0 };

    /// Parse "major.minor"
    pub fn parse(s: &str) -> Option<Self> {
        let (major, minor) = s.split_once('.')?;
        Some(Self {
            major: major.parse().ok()?,
            minor: minor.parse().ok()?,
        })
    }

    /// Check if this version is compatible with another version
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.major == other.major
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::V1_0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_id_uniqueness() {
        let id1 = CommentId::new();
        let id2 = CommentId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_comment_id_round_trip_string() {
        let id = CommentId::new();
        let parsed = CommentId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
        assert!(CommentId::from_string("nonexistent-id").is_err());
    }

    #[test]
    fn test_comment_id_short() {
        let id = CommentId::new();
        assert_eq!(id.short().len(), 8);
        assert!(id.0.simple().to_string().starts_with(&id.short()));
    }

    #[test]
    fn test_post_id_validation() {
        assert!(PostId::from_string("game-42").is_ok());
        assert!(PostId::from_string("").is_err());
        assert!(PostId::from_string("   ").is_err());
        assert!(PostId::from_string("bad\nid").is_err());
    }

    #[test]
    fn test_schema_version() {
        let v = SchemaVersion::parse("1.3").unwrap();
        assert_eq!(v, SchemaVersion { major: 1, minor: 3 });
        assert!(v.is_compatible(&SchemaVersion::V1_0));
        assert!(!SchemaVersion { major: 2, minor: 0 }.is_compatible(&SchemaVersion::V1_0));
        assert!(SchemaVersion::parse("one").is_none());
        assert_eq!(SchemaVersion::V1_0.to_string(), "1.0");
    }
}
