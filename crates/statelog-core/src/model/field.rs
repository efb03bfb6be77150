//! Field names of a state document

use std::fmt;

/// One of the six sequences in a state document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Decisions,
    Built,
    OpenQuestions,
    Resolved,
    KeyFiles,
    Context,
}

impl Field {
    /// All fields in on-disk order
    pub const ALL: [Field; 6] = [
        Field::Decisions,
        Field::Built,
        Field::OpenQuestions,
        Field::Resolved,
        Field::KeyFiles,
        Field::Context,
    ];

    /// Key used for this field in the serialized document
    pub fn key(&self) -> &'static str {
        match self {
            Field::Decisions => "what_we_decided",
            Field::Built => "what_we_built",
            Field::OpenQuestions => "what_we_need_to_decide",
            Field::Resolved => "what_we_resolved",
            Field::KeyFiles => "important_files",
            Field::Context => "context",
        }
    }

    /// Whether plain appends may target this field
    ///
    /// `Resolved` only grows through the resolve operation.
    pub fn is_appendable(&self) -> bool {
        !matches!(self, Field::Resolved)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_resolved_is_not_appendable() {
        let appendable: Vec<_> = Field::ALL.iter().filter(|f| f.is_appendable()).collect();
        assert_eq!(appendable.len(), 5);
        assert!(!Field::Resolved.is_appendable());
    }

    #[test]
    fn test_keys_are_distinct() {
        let mut keys: Vec<_> = Field::ALL.iter().map(Field::key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Field::ALL.len());
    }
}
