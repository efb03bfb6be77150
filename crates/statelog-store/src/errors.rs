//! Error handling for statelog-store
//!
//! Wraps statelog-core ExError with store-specific helpers

use statelog_core::errors::{ExError, JournalError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a corrupt-state error for a document that exists but does not parse
pub fn corrupt_state(document: &str, reason: impl std::fmt::Display) -> ExError {
    ExError::from(JournalError::CorruptState {
        document: document.to_string(),
        reason: reason.to_string(),
    })
    .with_op("load_document")
}

/// Create a read error for a document that exists but cannot be read
pub fn read_failure(document: &str, err: std::io::Error) -> ExError {
    ExError::from(JournalError::ReadFailure {
        document: document.to_string(),
        reason: err.to_string(),
    })
    .with_op("load_document")
}

/// Create a write error for a document that could not be replaced
pub fn write_failure(document: &str, operation: &str, err: std::io::Error) -> ExError {
    ExError::from(JournalError::WriteFailure {
        document: document.to_string(),
        reason: err.to_string(),
    })
    .with_op(operation.to_string())
}

/// Create a serialization error
pub fn from_serde(document: &str, err: serde_json::Error) -> ExError {
    ExError::from(JournalError::from(err))
        .with_op("serialize_document")
        .with_document(document)
}
