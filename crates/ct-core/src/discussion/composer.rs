//! Draft state for the comment and reply forms

use crate::types::CommentId;

/// Pending input of the viewer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    comment_draft: String,
    reply_draft: String,
    replying_to: Option<CommentId>,
}

impl Composer {
    /// Create an empty composer
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft of the next top-level comment
    pub fn comment_draft(&self) -> &str {
        &self.comment_draft
    }

    /// Replace the comment draft
    pub fn set_comment_draft(&mut self, text: impl Into<String>) {
        self.comment_draft = text.into();
    }

    /// Draft of the next reply
    pub fn reply_draft(&self) -> &str {
        &self.reply_draft
    }

    /// Replace the reply draft
    pub fn set_reply_draft(&mut self, text: impl Into<String>) {
        self.reply_draft = text.into();
    }

    /// Comment the reply form is open under
    pub fn replying_to(&self) -> Option<&CommentId> {
        self.replying_to.as_ref()
    }

    /// Open the reply form under `id`, or close it if it is already open there
    pub fn toggle_reply_target(&mut self, id: &CommentId) -> Option<&CommentId> {
        if self.replying_to.as_ref() == Some(id) {
            self.replying_to = None;
        } else {
            self.replying_to = Some(id.clone());
        }
        self.replying_to.as_ref()
    }

    /// Close the reply form; the reply draft is kept
    pub fn cancel_reply(&mut self) {
        self.replying_to = None;
    }

    pub(crate) fn clear_comment_draft(&mut self) {
        self.comment_draft.clear();
    }

    pub(crate) fn finish_reply(&mut self) {
        self.reply_draft.clear();
        self.replying_to = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_reply_target() {
        let mut composer = Composer::new();
        let a = CommentId::new();
        let b = CommentId::new();

        assert_eq!(composer.toggle_reply_target(&a), Some(&a));
        assert_eq!(composer.toggle_reply_target(&b), Some(&b));
        assert_eq!(composer.toggle_reply_target(&b), None);
        assert!(composer.replying_to().is_none());
    }

    #[test]
    fn test_cancel_keeps_draft() {
        let mut composer = Composer::new();
        let a = CommentId::new();
        composer.toggle_reply_target(&a);
        composer.set_reply_draft("half written");

        composer.cancel_reply();

        assert!(composer.replying_to().is_none());
        assert_eq!(composer.reply_draft(), "half written");
    }

    #[test]
    fn test_finish_reply_clears_everything() {
        let mut composer = Composer::new();
        composer.toggle_reply_target(&CommentId::new());
        composer.set_reply_draft("done");

        composer.finish_reply();

        assert_eq!(composer, Composer::new());
    }
}
