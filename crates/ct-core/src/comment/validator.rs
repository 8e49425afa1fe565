//! Comment body and author validation

use crate::error::{CommentTreeError, Result};

/// Denominator of the draft counter when no limit is configured
pub const COUNTER_LENGTH: usize = 500;

/// Validator for comment input
///
/// Bodies have no length limit unless one is set explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentValidator {
    max_length: Option<usize>,
}

impl CommentValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new validator that rejects bodies over `max_length` characters
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
        }
    }

    /// Create a validator from an optional limit
    pub fn with_limit(max_length: Option<usize>) -> Self {
        Self { max_length }
    }

    /// Configured maximum, in characters
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Trim a body for storage.
    ///
    /// Returns `Ok(None)` for an empty or whitespace-only body; callers treat
    /// that as "nothing to submit" rather than a failure.
    pub fn normalize_body(&self, body: &str) -> Result<Option<String>> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        if let Some(max) = self.max_length {
            let length = trimmed.chars().count();
            if length > max {
                return Err(CommentTreeError::BodyTooLong { length, max });
            }
        }

        Ok(Some(trimmed.to_string()))
    }

    /// Validate the posting identity
    pub fn validate_author(&self, author: &str) -> Result<()> {
        if author.trim().is_empty() {
            return Err(CommentTreeError::Validation(
                "Author cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether a draft would be accepted by a submit
    pub fn can_submit(&self, body: &str) -> bool {
        matches!(self.normalize_body(body), Ok(Some(_)))
    }

    /// Character counter for a draft, e.g. `"12/500"`
    pub fn counter(&self, draft: &str) -> String {
        format!(
            "{}/{}",
            draft.chars().count(),
            self.max_length.unwrap_or(COUNTER_LENGTH)
        )
    }
}
