//! Exporter trait and manager

use crate::comment::Thread;
use crate::error::{CommentTreeError, Result};
use crate::types::PostId;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Trait for thread exporters
pub trait Exporter: Send + Sync {
    /// Export a post's thread to string
    fn export(&self, post_id: &PostId, thread: &Thread) -> Result<String>;

    /// Get the format name
    fn format_name(&self) -> &str;

    /// Get the file extension
    fn file_extension(&self) -> &str;
}

/// Manager for handling multiple export formats
pub struct ExportManager {
    exporters: HashMap<String, Box<dyn Exporter>>,
}

impl ExportManager {
    /// Create a new export manager with default exporters
    pub fn new() -> Self {
        let mut manager = Self {
            exporters: HashMap::new(),
        };

        manager.register(Box::new(super::json::JsonExporter::new(false)));
        manager.register(Box::new(super::json::JsonExporter::compact()));
        manager.register(Box::new(super::markdown::MarkdownExporter::new()));
        manager.register(Box::new(super::text::TextExporter::new()));

        manager
    }

    /// Create a manager whose renderers show or hide avatars
    pub fn with_avatars(show_avatars: bool) -> Self {
        let mut manager = Self::new();
        manager.register(Box::new(
            super::markdown::MarkdownExporter::new().with_avatars(show_avatars),
        ));
        manager.register(Box::new(
            super::text::TextExporter::new().with_avatars(show_avatars),
        ));
        manager
    }

    /// Register a new exporter, replacing any with the same format name
    pub fn register(&mut self, exporter: Box<dyn Exporter>) {
        self.exporters
            .insert(exporter.format_name().to_string(), exporter);
    }

    fn exporter(&self, format: &str) -> Result<&dyn Exporter> {
        self.exporters
            .get(format)
            .map(|e| e.as_ref())
            .ok_or_else(|| CommentTreeError::Validation(format!("Unknown export format: {}", format)))
    }

    /// Export a thread to the specified format
    pub fn export(&self, post_id: &PostId, thread: &Thread, format: &str) -> Result<String> {
        self.exporter(format)?.export(post_id, thread)
    }

    /// Export a thread to a file
    pub fn export_to_file(
        &self,
        post_id: &PostId,
        thread: &Thread,
        format: &str,
        path: &Path,
    ) -> Result<()> {
        let exporter = self.exporter(format)?;
        let content = exporter.export(post_id, thread)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let final_path = if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension(exporter.file_extension())
        };

        // Atomic write using temp file
        let temp_path = final_path.with_extension("tmp");
        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;
        }

        fs::rename(&temp_path, &final_path)?;
        Ok(())
    }

    /// Get list of available format names
    pub fn available_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self.exporters.keys().cloned().collect();
        formats.sort();
        formats
    }

    /// Check if a format is available
    pub fn has_format(&self, format: &str) -> bool {
        self.exporters.contains_key(format)
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}
