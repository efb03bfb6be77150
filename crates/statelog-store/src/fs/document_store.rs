//! Filesystem document store
//!
//! Maps each `DocumentName` to `<root>/<name>` holding the document as
//! pretty-printed JSON.

use crate::errors::{corrupt_state, from_serde, read_failure, Result};
use crate::fs::atomic::atomic_write;
use statelog_core::{DocumentName, StateDocument};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem-backed store of state documents
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    /// Create a store rooted at the given journal directory
    ///
    /// The directory is created on first write, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Journal directory this store writes into
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the backing file for a document
    pub fn path_for(&self, name: &DocumentName) -> PathBuf {
        self.root.join(name.as_str())
    }

    /// Read a document if its backing file exists
    ///
    /// # Errors
    ///
    /// - `CorruptState` if the file exists but is not a valid state document
    /// - `Io` if the file exists but cannot be read
    pub fn read(&self, name: &DocumentName) -> Result<Option<StateDocument>> {
        let path = self.path_for(name);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(read_failure(name.as_str(), e)),
        };

        parse_document(name, &bytes).map(Some)
    }

    /// Load a document, or return a fresh empty one if it does not exist
    ///
    /// Never creates anything on disk; the bootstrapped document only
    /// becomes durable through a later [`write`](Self::write).
    ///
    /// # Errors
    ///
    /// Same as [`read`](Self::read). A corrupt file is left as it is.
    pub fn load_or_create(&self, name: &DocumentName) -> Result<StateDocument> {
        match self.read(name)? {
            Some(document) => Ok(document),
            None => {
                tracing::debug!(document = %name, "bootstrapping empty document");
                Ok(StateDocument::new())
            }
        }
    }

    /// Replace a document's backing file with `document`
    ///
    /// No locking: concurrent writers to one name end as last-writer-wins.
    ///
    /// # Errors
    ///
    /// Returns `WriteFailure` if the file cannot be replaced; the previous
    /// content is then still in place.
    pub fn write(&self, name: &DocumentName, document: &StateDocument) -> Result<()> {
        let bytes = serialize_document(name, document)?;
        atomic_write(&self.path_for(name), &bytes)
    }
}

/// Serialize a document: 2-space indented JSON, stable key order, trailing newline
///
/// # Errors
///
/// Returns `Serialization` if JSON encoding fails.
pub fn serialize_document(name: &DocumentName, document: &StateDocument) -> Result<Vec<u8>> {
    let mut bytes =
        serde_json::to_vec_pretty(document).map_err(|e| from_serde(name.as_str(), e))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Parse stored bytes as a state document
///
/// # Errors
///
/// Returns `CorruptState` for invalid UTF-8, invalid JSON, or a shape
/// other than the six-field document.
pub fn parse_document(name: &DocumentName, bytes: &[u8]) -> Result<StateDocument> {
    let text = std::str::from_utf8(bytes).map_err(|e| corrupt_state(name.as_str(), e))?;
    serde_json::from_str(text).map_err(|e| corrupt_state(name.as_str(), e))
}
