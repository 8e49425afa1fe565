//! File system storage for threads

use ct_core::comment::Thread;
use ct_core::error::{CommentTreeError, Result};
use ct_core::storage::{ThreadFile, ThreadInfo, ThreadStorage};
use ct_core::types::PostId;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File system based thread storage, one JSON file per post
pub struct FileSystemStorage {
    /// Base directory for storage
    base_dir: PathBuf,
    /// Threads subdirectory
    threads_dir: PathBuf,
}

impl FileSystemStorage {
    /// Create a new file system storage
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        let threads_dir = base_dir.join("threads");

        let storage = Self {
            base_dir,
            threads_dir,
        };

        storage.ensure_dirs()?;
        Ok(storage)
    }

    /// Default data directory (platform data dir, or ~/.comment-tree)
    pub fn default_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "comment-tree", "comment-tree")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".comment-tree")
            })
    }

    /// Create storage in the default directory
    pub fn default_location() -> Result<Self> {
        Self::new(Self::default_dir())
    }

    /// Ensure required directories exist
    fn ensure_dirs(&self) -> Result<()> {
        if !self.threads_dir.exists() {
            fs::create_dir_all(&self.threads_dir).map_err(|e| {
                CommentTreeError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create threads directory: {}", e),
                ))
            })?;
            debug!("Created threads directory: {:?}", self.threads_dir);
        }
        Ok(())
    }

    /// File stem for a post; post IDs are free text, so they are hashed
    fn file_stem(post_id: &PostId) -> String {
        let hash = blake3::hash(post_id.as_str().as_bytes());
        format!("t_{}", &hash.to_hex()[..16])
    }

    /// Get the path for a thread file
    fn thread_path(&self, post_id: &PostId) -> PathBuf {
        self.threads_dir
            .join(format!("{}.json", Self::file_stem(post_id)))
    }

    /// Get a temporary path for atomic writes
    fn temp_path(&self, post_id: &PostId) -> PathBuf {
        self.threads_dir
            .join(format!(".{}.json.tmp", Self::file_stem(post_id)))
    }

    /// Write thread atomically (write to temp, then rename)
    fn atomic_write(&self, post_id: &PostId, thread: &Thread) -> Result<()> {
        let temp_path = self.temp_path(post_id);
        let final_path = self.thread_path(post_id);

        let file = ThreadFile::new(post_id.clone(), thread.clone());

        let temp_file = fs::File::create(&temp_path).map_err(|e| {
            CommentTreeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;
        let mut writer = BufWriter::new(temp_file);
        serde_json::to_writer_pretty(&mut writer, &file)?;
        writer.flush()?;

        // Rename to final path (atomic on most filesystems)
        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            CommentTreeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file: {}", e),
            ))
        })?;

        debug!(
            "Saved thread for {} ({} nodes) to {:?}",
            post_id,
            thread.total_count(),
            final_path
        );
        Ok(())
    }

    /// Read, parse and version-check a thread file
    fn read_file(&self, path: &Path) -> Result<ThreadFile> {
        let file = fs::File::open(path)?;
        let reader = BufReader::new(file);
        let thread_file: ThreadFile = serde_json::from_reader(reader)?;
        thread_file.check_version()?;
        Ok(thread_file)
    }

    /// Get base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get threads directory
    pub fn threads_dir(&self) -> &PathBuf {
        &self.threads_dir
    }
}

impl ThreadStorage for FileSystemStorage {
    fn save(&self, post_id: &PostId, thread: &Thread) -> Result<()> {
        self.atomic_write(post_id, thread)
    }

    fn load(&self, post_id: &PostId) -> Result<Thread> {
        let path = self.thread_path(post_id);
        if !path.exists() {
            return Err(CommentTreeError::ThreadNotFound(post_id.to_string()));
        }

        let file = self
            .read_file(&path)
            .map_err(|e| e.with_context(format!("Failed to read thread for {}", post_id)))?;

        if &file.post_id != post_id {
            warn!(
                "Thread file {:?} belongs to {}, expected {}",
                path, file.post_id, post_id
            );
            return Err(CommentTreeError::ThreadNotFound(post_id.to_string()));
        }

        Ok(file.into_thread())
    }

    fn list(&self) -> Result<Vec<ThreadInfo>> {
        let mut threads = Vec::new();

        let entries = fs::read_dir(&self.threads_dir).map_err(|e| {
            CommentTreeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read threads directory: {}", e),
            ))
        })?;

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();

            // Skip non-json files and temp files
            if !path.extension().map(|e| e == "json").unwrap_or(false) {
                continue;
            }
            if path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with('.'))
                .unwrap_or(false)
            {
                continue;
            }

            match self.read_file(&path) {
                Ok(file) => threads.push(file.info()),
                Err(e) => {
                    warn!("Failed to read thread file {:?}: {}", path, e);
                }
            }
        }

        threads.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(threads)
    }

    fn delete(&self, post_id: &PostId) -> Result<()> {
        let path = self.thread_path(post_id);

        if !path.exists() {
            return Err(CommentTreeError::ThreadNotFound(post_id.to_string()));
        }

        fs::remove_file(&path).map_err(|e| {
            CommentTreeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to delete thread file: {}", e),
            ))
        })?;

        debug!("Deleted thread for {} from {:?}", post_id, path);
        Ok(())
    }

    fn exists(&self, post_id: &PostId) -> bool {
        self.thread_path(post_id).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_core::comment::Node;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn create_test_storage() -> (FileSystemStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileSystemStorage::new(temp_dir.path()).unwrap();
        (storage, temp_dir)
    }

    fn post(id: &str) -> PostId {
        PostId::from_string(id).unwrap()
    }

    fn create_test_thread() -> Thread {
        let mut thread = Thread::new();
        let root = thread.add_comment("alice", "hello").unwrap().unwrap();
        thread.add_reply(root.id(), "bob", "hi back").unwrap();
        thread.toggle_like(root.id(), None).unwrap();
        thread
    }

    #[test]
    fn test_storage_creation() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.threads_dir().exists());
    }

    #[test]
    fn test_thread_path_is_hashed() {
        let (storage, _temp) = create_test_storage();
        let path = storage.thread_path(&post("../../etc/passwd"));

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("t_"));
        assert!(name.ends_with(".json"));
        assert_eq!(name.len(), "t_".len() + 16 + ".json".len());
        assert_eq!(path.parent().unwrap(), storage.threads_dir().as_path());
    }

    #[test]
    fn test_save_and_load() {
        let (storage, _temp) = create_test_storage();
        let thread = create_test_thread();

        storage.save(&post("game-42"), &thread).unwrap();
        assert!(storage.exists(&post("game-42")));

        let loaded = storage.load(&post("game-42")).unwrap();
        assert_eq!(loaded.comments(), thread.comments());
        assert!(loaded.comments()[0].likes().is_liked());
    }

    #[test]
    fn test_load_nonexistent() {
        let (storage, _temp) = create_test_storage();
        assert!(matches!(
            storage.load(&post("missing")),
            Err(CommentTreeError::ThreadNotFound(_))
        ));
        assert!(storage.load_or_default(&post("missing")).unwrap().is_empty());
    }

    #[test]
    fn test_list_threads() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.list().unwrap().is_empty());

        storage.save(&post("a"), &create_test_thread()).unwrap();
        storage.save(&post("b"), &Thread::new()).unwrap();

        let list = storage.list().unwrap();
        assert_eq!(list.len(), 2);
        let a = list.iter().find(|i| i.post_id == post("a")).unwrap();
        assert_eq!(a.total_count, 2);
    }

    #[test]
    fn test_delete_thread() {
        let (storage, _temp) = create_test_storage();
        storage.save(&post("a"), &Thread::new()).unwrap();

        storage.delete(&post("a")).unwrap();
        assert!(!storage.exists(&post("a")));
        assert!(storage.delete(&post("a")).is_err());
    }

    #[test]
    fn test_atomic_write() {
        let (storage, _temp) = create_test_storage();
        let id = post("a");
        storage.save(&id, &create_test_thread()).unwrap();

        assert!(!storage.temp_path(&id).exists());
        let content = fs::read_to_string(storage.thread_path(&id)).unwrap();
        assert!(content.contains("schema_version"));
        assert!(content.contains("\"post_id\": \"a\""));
    }

    #[test]
    fn test_incompatible_schema_rejected() {
        let (storage, _temp) = create_test_storage();
        let id = post("a");
        storage.save(&id, &Thread::new()).unwrap();

        let path = storage.thread_path(&id);
        let content = fs::read_to_string(&path)
            .unwrap()
            .replace("\"schema_version\": \"1.0\"", "\"schema_version\": \"2.0\"");
        fs::write(&path, content).unwrap();

        assert!(storage.load(&id).is_err());
        assert!(storage.list().unwrap().is_empty());
    }

    #[test]
    fn test_ignores_temp_and_non_json_files() {
        let (storage, _temp) = create_test_storage();

        fs::write(storage.threads_dir().join(".temp.json.tmp"), "{}").unwrap();
        fs::write(storage.threads_dir().join(".hidden.json"), "{}").unwrap();
        fs::write(storage.threads_dir().join("readme.txt"), "test").unwrap();

        assert!(storage.list().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_skipped_in_list() {
        let (storage, _temp) = create_test_storage();
        storage.save(&post("good"), &Thread::new()).unwrap();
        fs::write(storage.threads_dir().join("t_broken.json"), "not json").unwrap();

        assert_eq!(storage.list().unwrap().len(), 1);
    }
}
