//! Field-level operations on a state document
//!
//! These are pure: they mutate an in-memory document and never touch
//! storage. Persisting the result is the caller's job.

pub mod append;
pub mod resolve;

pub use append::apply_append;
pub use resolve::{apply_resolve, ResolveOutcome, ResolvedQuestion, RESOLUTION_SEPARATOR};
