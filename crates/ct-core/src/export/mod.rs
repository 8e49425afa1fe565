//! Export functionality for threads
//!
//! Exporters render a post's thread for display or hand-off:
//! - JSON (pretty and compact)
//! - Markdown (readable report with quoted replies)
//! - Text (indented tree with short IDs, for terminals)
//!
//! # Example
//!
//! ```ignore
//! use ct_core::export::ExportManager;
//!
//! let manager = ExportManager::new();
//! let md = manager.export(&post_id, &thread, "markdown")?;
//! ```

mod exporter;
mod json;
mod markdown;
mod text;

pub use exporter::{ExportManager, Exporter};
pub use json::{ExportData, JsonExporter};
pub use markdown::{MarkdownExporter, EMPTY_HINT, EMPTY_TITLE};
pub use text::TextExporter;
