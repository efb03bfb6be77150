//! Command orchestration layer.
//!
//! - `router`: command tokens, scopes and document names
//! - `engine_command`: the load → mutate → write cycle
//! - `confirmation`: human-readable result lines

pub mod confirmation;
pub mod engine_command;
pub mod router;
