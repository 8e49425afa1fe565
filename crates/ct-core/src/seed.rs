//! Demo thread used to pre-populate a discussion

use crate::comment::{CommentBuilder, Thread};
use crate::error::Result;
use chrono::{DateTime, Duration, Utc};

/// Two sample comments, the first with one reply the viewer has liked.
///
/// Timestamps are relative to `now`: 60, 50 and 30 minutes earlier.
pub fn demo_thread(now: DateTime<Utc>) -> Result<Thread> {
    let reply = CommentBuilder::new("noobgamer2024")
        .body("Agreed! The gameplay section was especially good.")
        .created_at(now - Duration::minutes(50))
        .avatar("🎮")
        .likes(2, true)
        .build_reply()?;

    let first = CommentBuilder::new("iris")
        .body("Great post! Really useful for people new to game development.")
        .created_at(now - Duration::minutes(60))
        .avatar("👩‍💻")
        .likes(5, false)
        .reply(reply)
        .build()?;

    let second = CommentBuilder::new("coder_alex")
        .body("Could you add some code examples? That would be awesome!")
        .created_at(now - Duration::minutes(30))
        .avatar("💻")
        .likes(3, false)
        .build()?;

    Thread::from_comments(vec![first, second])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::Node;

    #[test]
    fn test_demo_thread_shape() {
        let thread = demo_thread(Utc::now()).unwrap();

        assert_eq!(thread.len(), 2);
        assert_eq!(thread.total_count(), 3);
        assert_eq!(thread.comments()[0].author(), "iris");
        assert_eq!(thread.comments()[0].replies().len(), 1);
        assert!(thread.comments()[1].replies().is_empty());
    }

    #[test]
    fn test_demo_reply_unlike_restores_consistent_count() {
        let mut thread = demo_thread(Utc::now()).unwrap();
        let parent = thread.comments()[0].id().clone();
        let reply = thread.comments()[0].replies()[0].id().clone();

        let likes = thread.toggle_like(&reply, Some(&parent)).unwrap();
        assert_eq!(likes.count(), 1);
        assert!(!likes.is_liked());
    }

    #[test]
    fn test_demo_thread_accepts_new_comments_on_top() {
        let mut thread = demo_thread(Utc::now()).unwrap();
        thread.add_comment("alice", "hello").unwrap();
        assert_eq!(thread.comments()[0].author(), "alice");
        assert_eq!(thread.total_count(), 4);
    }
}
