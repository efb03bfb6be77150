//! statelog Store - durable storage for state documents
//!
//! Provides:
//! - One JSON file per document name inside a journal directory
//! - Load-or-initialize reads that never create files
//! - Atomic write-back via temp file + rename
//!
//! The store knows nothing about commands or subsystems; it only maps a
//! `DocumentName` to a file.

pub mod errors;
pub mod fs;

// Re-export key types
pub use errors::Result;
pub use fs::DocumentStore;
