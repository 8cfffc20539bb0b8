//! Knowledge-base persistence.
//!
//! Startup-only file access: a persisted JSON copy of the knowledge tables is
//! loaded if present; otherwise the built-in defaults are written out and
//! used, so the next start finds a table to edit. After this point the
//! knowledge base is read-only.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use super::KnowledgeBase;

/// Errors from loading or initializing the persisted knowledge base.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The table file could not be read or written.
    #[error("knowledge table I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The table file exists but is not valid JSON for these tables.
    #[error("malformed knowledge table: {0}")]
    Format(#[from] serde_json::Error),
}

impl KnowledgeBase {
    /// Loads the knowledge base from `path`, or writes the built-in defaults
    /// there and returns them if no file exists yet.
    ///
    /// A malformed existing file is an error, not silently replaced: it
    /// indicates a broken deployment rather than a fresh one.
    pub fn load_or_init(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if path.exists() {
            let text = fs::read_to_string(path)?;
            let kb = serde_json::from_str(&text)?;
            debug!(path = %path.display(), "loaded knowledge base");
            Ok(kb)
        } else {
            let kb = Self::default();
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, serde_json::to_string_pretty(&kb)?)?;
            debug!(path = %path.display(), "initialized default knowledge base");
            Ok(kb)
        }
    }
}
