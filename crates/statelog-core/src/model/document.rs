//! State document model
//!
//! A state document is the unit of persistence: six ordered sequences of
//! dated strings. The serialized shape is strict. All six keys must be
//! present, entries must be strings, and unknown keys are rejected. The
//! only optional key is the informational `subsystem` marker.

use crate::model::field::Field;
use serde::{Deserialize, Serialize};

/// The six-field record persisted for one scope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateDocument {
    /// Decisions made, oldest first
    #[serde(rename = "what_we_decided")]
    pub decisions: Vec<String>,

    /// Work completed
    #[serde(rename = "what_we_built")]
    pub built: Vec<String>,

    /// Questions still awaiting a decision
    #[serde(rename = "what_we_need_to_decide")]
    pub open_questions: Vec<String>,

    /// Closed questions, each carrying its resolution
    #[serde(rename = "what_we_resolved")]
    pub resolved: Vec<String>,

    /// Entry-point files worth knowing about
    #[serde(rename = "important_files")]
    pub key_files: Vec<String>,

    /// Background facts and constraints
    pub context: Vec<String>,

    /// Subsystem this document belongs to (informational only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsystem: Option<String>,
}

impl StateDocument {
    /// Create a document with all six fields empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries of one field
    pub fn entries(&self, field: Field) -> &[String] {
        match field {
            Field::Decisions => &self.decisions,
            Field::Built => &self.built,
            Field::OpenQuestions => &self.open_questions,
            Field::Resolved => &self.resolved,
            Field::KeyFiles => &self.key_files,
            Field::Context => &self.context,
        }
    }

    pub(crate) fn entries_mut(&mut self, field: Field) -> &mut Vec<String> {
        match field {
            Field::Decisions => &mut self.decisions,
            Field::Built => &mut self.built,
            Field::OpenQuestions => &mut self.open_questions,
            Field::Resolved => &mut self.resolved,
            Field::KeyFiles => &mut self.key_files,
            Field::Context => &mut self.context,
        }
    }

    /// Fields that hold at least one entry, in on-disk order
    pub fn populated_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| !self.entries(*f).is_empty())
            .collect()
    }

    /// True when all six fields are empty
    pub fn is_empty(&self) -> bool {
        self.populated_fields().is_empty()
    }
}
