//! Atomic write primitives
//!
//! Uses temp→rename so a reader sees either the old document or the new
//! one, never a partial write.

use crate::errors::{write_failure, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Atomically replace `target_path` with `content`
///
/// The temp file lives in the target's directory and has a unique name,
/// so concurrent writers never share one. On failure the temp file is
/// removed and the target is untouched.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    let document = target_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parent = target_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    fs::create_dir_all(parent).map_err(|e| write_failure(&document, "create_journal_dir", e))?;

    let temp_path = temp_path_for(parent, &document);

    if let Err(e) = write_synced(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_failure(&document, "write_document_temp", e));
    }

    if let Err(e) = fs::rename(&temp_path, target_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_failure(&document, "rename_document_temp", e));
    }

    tracing::debug!(
        document = %document,
        bytes = content.len(),
        "document replaced"
    );
    Ok(())
}

fn temp_path_for(dir: &Path, document: &str) -> PathBuf {
    dir.join(format!(".{}.{}.tmp", document, Uuid::now_v7().simple()))
}

fn write_synced(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(content)?;
    file.sync_all()
}
