//! Journal scopes and the document names they map to

use crate::errors::{JournalError, Result};
use std::fmt;

/// File name of the main journal document
pub const MAIN_DOCUMENT_NAME: &str = "project.json";

/// Suffix appended to a subsystem id to form its document name
pub const SUBSYSTEM_DOCUMENT_SUFFIX: &str = "-state.json";

/// A validated subsystem identifier
///
/// Never empty, never `.` or `..`, and free of path separators, `:` and
/// control characters, so it can be used as a file name prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubsystemId(String);

impl SubsystemId {
    /// Validate a subsystem token
    ///
    /// # Errors
    ///
    /// Returns `InvalidScope` if the token is empty, is `.` or `..`, or
    /// contains `/`, `\`, `:` or a control character.
    pub fn parse(token: &str) -> Result<Self> {
        let reject = |reason: &str| JournalError::InvalidScope {
            scope: token.to_string(),
            reason: reason.to_string(),
        };

        if token.is_empty() {
            return Err(reject("subsystem name cannot be empty"));
        }
        if token == "." || token == ".." {
            return Err(reject("subsystem name cannot be a relative path"));
        }
        if let Some(c) = token
            .chars()
            .find(|c| matches!(c, '/' | '\\' | ':') || c.is_control())
        {
            return Err(reject(&format!("disallowed character {:?}", c)));
        }

        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubsystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which journal a command targets
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Main,
    Subsystem(SubsystemId),
}

impl Scope {
    /// Build a scope from an optional subsystem token
    ///
    /// # Errors
    ///
    /// Returns `InvalidScope` if the token fails validation.
    pub fn from_token(token: Option<&str>) -> Result<Self> {
        match token {
            None => Ok(Scope::Main),
            Some(t) => SubsystemId::parse(t).map(Scope::Subsystem),
        }
    }

    /// Subsystem id, if this is a subsystem scope
    pub fn subsystem(&self) -> Option<&SubsystemId> {
        match self {
            Scope::Main => None,
            Scope::Subsystem(id) => Some(id),
        }
    }

    /// Label suffix used in confirmations: empty for main, ` [id]` otherwise
    pub fn label(&self) -> String {
        match self {
            Scope::Main => String::new(),
            Scope::Subsystem(id) => format!(" [{}]", id),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Main => f.write_str("main"),
            Scope::Subsystem(id) => write!(f, "{}", id),
        }
    }
}

/// File name of a state document inside the journal directory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentName(String);

impl DocumentName {
    /// Name of the main document
    pub fn main() -> Self {
        Self(MAIN_DOCUMENT_NAME.to_string())
    }

    /// Name of a subsystem document: the id followed by the fixed suffix
    pub fn for_subsystem(id: &SubsystemId) -> Self {
        Self(format!("{}{}", id.as_str(), SUBSYSTEM_DOCUMENT_SUFFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsystem_accepts_plain_tokens() {
        for token in ["tracking", "meta-tracking", "glossary_v2", "ü"] {
            assert!(SubsystemId::parse(token).is_ok(), "{token} should be valid");
        }
    }

    #[test]
    fn test_subsystem_rejects_separators_and_controls() {
        for token in ["", ".", "..", "a/b", "a\\b", "a:b", "a\nb", "a\0b"] {
            let err = SubsystemId::parse(token).unwrap_err();
            assert!(
                matches!(err, JournalError::InvalidScope { .. }),
                "{token:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_document_names() {
        assert_eq!(DocumentName::main().as_str(), "project.json");
        let id = SubsystemId::parse("glossary").unwrap();
        assert_eq!(DocumentName::for_subsystem(&id).as_str(), "glossary-state.json");
    }

    #[test]
    fn test_scope_labels() {
        assert_eq!(Scope::Main.label(), "");
        let scope = Scope::from_token(Some("tracking")).unwrap();
        assert_eq!(scope.label(), " [tracking]");
        assert_eq!(scope.to_string(), "tracking");
    }
}
