//! statelog Core - state documents and the operations that mutate them
//!
//! This crate provides:
//! - The `StateDocument` model and its strict serialized shape
//! - Scope and document-name derivation for main and subsystem journals
//! - Pure append and resolve operations
//! - The `Clock` seam that dates every entry
//! - The error facility (`JournalError`, `ExError`) and logging facility

pub mod clock;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{ExError, ExErrorKind, JournalError, Result};
pub use model::{DocumentName, Field, Scope, StateDocument, SubsystemId};
pub use ops::{apply_append, apply_resolve, ResolveOutcome};
