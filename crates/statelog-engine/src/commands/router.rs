//! Command routing
//!
//! A command names its scope in one of two notations: an explicit
//! subsystem argument, or a `:subsystem` suffix on the command token
//! (`decided:tracking`). Both produce the same `Scope`, and so the same
//! document name. When both are given the suffix wins.

use statelog_core::errors::{JournalError, Result};
use statelog_core::{DocumentName, Field, Scope};
use std::fmt;

/// Journal commands accepted by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Decided,
    Built,
    Question,
    File,
    Context,
    Resolve,
    /// Whole-document read; never mutates
    Show,
}

impl CommandKind {
    pub const ALL: [CommandKind; 7] = [
        CommandKind::Decided,
        CommandKind::Built,
        CommandKind::Question,
        CommandKind::File,
        CommandKind::Context,
        CommandKind::Resolve,
        CommandKind::Show,
    ];

    /// Parse a bare command name (no scope suffix)
    ///
    /// # Errors
    ///
    /// Returns `UnknownCommand` for anything outside [`CommandKind::ALL`].
    pub fn parse(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| JournalError::UnknownCommand {
                command: name.to_string(),
            })
    }

    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Decided => "decided",
            CommandKind::Built => "built",
            CommandKind::Question => "question",
            CommandKind::File => "file",
            CommandKind::Context => "context",
            CommandKind::Resolve => "resolve",
            CommandKind::Show => "show",
        }
    }

    /// Field targeted by an append command
    pub fn field(&self) -> Option<Field> {
        match self {
            CommandKind::Decided => Some(Field::Decisions),
            CommandKind::Built => Some(Field::Built),
            CommandKind::Question => Some(Field::OpenQuestions),
            CommandKind::File => Some(Field::KeyFiles),
            CommandKind::Context => Some(Field::Context),
            CommandKind::Resolve | CommandKind::Show => None,
        }
    }

    /// Number of text arguments the command takes
    pub fn arity(&self) -> usize {
        match self {
            CommandKind::Resolve => 2,
            CommandKind::Show => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A command token resolved to its kind, scope and target document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub kind: CommandKind,
    pub scope: Scope,
    pub document_name: DocumentName,
}

/// Split `command[:subsystem]` on the first `:`
pub fn parse_command_token(token: &str) -> (&str, Option<&str>) {
    match token.split_once(':') {
        Some((command, subsystem)) => (command, Some(subsystem)),
        None => (token, None),
    }
}

/// Map a scope to the name of the document that stores it
pub fn resolve_document_name(scope: &Scope) -> DocumentName {
    match scope {
        Scope::Main => DocumentName::main(),
        Scope::Subsystem(id) => DocumentName::for_subsystem(id),
    }
}

/// Resolve a command token and optional explicit subsystem to a route
///
/// # Errors
///
/// - `InvalidScope` if the effective subsystem token fails validation
/// - `UnknownCommand` if the command name is not recognised
pub fn route(command_token: &str, explicit_subsystem: Option<&str>) -> Result<Route> {
    let (command, embedded) = parse_command_token(command_token);
    let scope = Scope::from_token(embedded.or(explicit_subsystem))?;
    let kind = CommandKind::parse(command)?;
    let document_name = resolve_document_name(&scope);

    Ok(Route {
        kind,
        scope,
        document_name,
    })
}
