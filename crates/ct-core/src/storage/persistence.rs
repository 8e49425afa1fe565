//! Thread storage trait and abstractions

use super::file::ThreadInfo;
use crate::comment::Thread;
use crate::error::Result;
use crate::types::PostId;

/// Trait for thread storage implementations
///
/// The engine never calls this; the host decides when to load and save.
pub trait ThreadStorage: Send + Sync {
    /// Save a post's thread
    fn save(&self, post_id: &PostId, thread: &Thread) -> Result<()>;

    /// Load a post's thread
    fn load(&self, post_id: &PostId) -> Result<Thread>;

    /// List all stored threads (as info)
    fn list(&self) -> Result<Vec<ThreadInfo>>;

    /// Delete a post's thread
    fn delete(&self, post_id: &PostId) -> Result<()>;

    /// Check if a thread exists
    fn exists(&self, post_id: &PostId) -> bool;

    /// Load a thread, or start an empty one if none is stored
    fn load_or_default(&self, post_id: &PostId) -> Result<Thread> {
        if self.exists(post_id) {
            self.load(post_id)
        } else {
            Ok(Thread::new())
        }
    }
}

/// In-memory storage for testing
#[cfg(test)]
pub mod memory {
    use super::*;
    use crate::CommentTreeError;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// In-memory thread storage for testing
    pub struct MemoryStorage {
        threads: RwLock<HashMap<PostId, Thread>>,
    }

    impl MemoryStorage {
        /// Create a new in-memory storage
        pub fn new() -> Self {
            Self {
                threads: RwLock::new(HashMap::new()),
            }
        }
    }

    impl Default for MemoryStorage {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ThreadStorage for MemoryStorage {
        fn save(&self, post_id: &PostId, thread: &Thread) -> Result<()> {
            let mut threads = self.threads.write().unwrap();
            threads.insert(post_id.clone(), thread.clone());
            Ok(())
        }

        fn load(&self, post_id: &PostId) -> Result<Thread> {
            let threads = self.threads.read().unwrap();
            threads
                .get(post_id)
                .cloned()
                .ok_or_else(|| CommentTreeError::ThreadNotFound(post_id.to_string()))
        }

        fn list(&self) -> Result<Vec<ThreadInfo>> {
            let threads = self.threads.read().unwrap();
            Ok(threads
                .iter()
                .map(|(id, thread)| ThreadInfo::new(id.clone(), Utc::now(), thread))
                .collect())
        }

        fn delete(&self, post_id: &PostId) -> Result<()> {
            let mut threads = self.threads.write().unwrap();
            threads
                .remove(post_id)
                .ok_or_else(|| CommentTreeError::ThreadNotFound(post_id.to_string()))?;
            Ok(())
        }

        fn exists(&self, post_id: &PostId) -> bool {
            let threads = self.threads.read().unwrap();
            threads.contains_key(post_id)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn post(id: &str) -> PostId {
            PostId::from_string(id).unwrap()
        }

        #[test]
        fn test_memory_storage_save_load() {
            let storage = MemoryStorage::new();
            let mut thread = Thread::new();
            thread.add_comment("alice", "hello").unwrap();

            storage.save(&post("a"), &thread).unwrap();
            let loaded = storage.load(&post("a")).unwrap();

            assert_eq!(loaded.comments(), thread.comments());
        }

        #[test]
        fn test_load_or_default() {
            let storage = MemoryStorage::new();
            let thread = storage.load_or_default(&post("missing")).unwrap();
            assert!(thread.is_empty());
            assert!(matches!(
                storage.load(&post("missing")),
                Err(CommentTreeError::ThreadNotFound(_))
            ));
        }

        #[test]
        fn test_memory_storage_list_and_delete() {
            let storage = MemoryStorage::new();
            storage.save(&post("a"), &Thread::new()).unwrap();
            storage.save(&post("b"), &Thread::new()).unwrap();
            assert_eq!(storage.list().unwrap().len(), 2);

            storage.delete(&post("a")).unwrap();
            assert!(!storage.exists(&post("a")));
            assert!(storage.delete(&post("a")).is_err());
        }
    }
}
