//! statelog Engine - Command routing layer
//!
//! Maps one journal command to a document name and a field operation,
//! runs the load → mutate → write cycle against the store, and formats
//! the confirmation shown to the caller.

pub mod commands;

pub use commands::confirmation::render_confirmation;
pub use commands::engine_command::{
    apply_journal_command, read_document, Change, CommandOutcome, JournalCommand, NoMatchPolicy,
};
pub use commands::router::{resolve_document_name, route, CommandKind, Route};
