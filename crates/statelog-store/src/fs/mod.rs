//! Filesystem-backed document storage
//!
//! Provides:
//! - `DocumentStore`: one file per document name under a root directory
//! - Atomic replace via uniquely named temp file + rename

mod atomic;
mod document_store;

pub use document_store::{parse_document, serialize_document, DocumentStore};
