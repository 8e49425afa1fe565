//! Thread persistence contract
//!
//! The engine keeps its thread in memory only. Hosts that want threads to
//! survive between runs implement [`ThreadStorage`] and write
//! [`ThreadFile`] envelopes; `ct-storage` provides a file-system backend.

mod file;
mod persistence;

pub use file::{ThreadFile, ThreadInfo, CURRENT_SCHEMA_VERSION};
pub use persistence::ThreadStorage;

// Re-export memory storage for testing
#[cfg(test)]
pub use persistence::memory::MemoryStorage;
