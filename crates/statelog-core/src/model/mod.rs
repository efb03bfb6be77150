//! Journal domain model
//!
//! - `StateDocument`: the six-field record persisted per scope
//! - `Field`: names one of the six fields
//! - `Scope` / `SubsystemId`: main journal or a named subsystem
//! - `DocumentName`: the file name a scope is stored under

pub mod document;
pub mod field;
pub mod scope;

pub use document::StateDocument;
pub use field::Field;
pub use scope::{DocumentName, Scope, SubsystemId};
