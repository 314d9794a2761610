//! # Storage Layer
//!
//! The durable key-value store behind the remembered search query. The
//! [`KeyValueStore`] trait is what the rest of the crate sees; the backend is injected.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - All keys live in one JSON object, `store.json`, in the data directory
//!   - Every `set` rewrites the file synchronously
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!
//! ## Storage Format
//!
//! ```text
//! ~/.local/share/hnview/
//! ├── store.json      # {"search": "rust async"}
//! └── config.json     # HnConfig
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// String-to-string storage that survives across sessions.
pub trait KeyValueStore {
    /// Read a key, `None` if it was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a key, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
