//! Journal commands and the load → mutate → write cycle.
//!
//! ## Logging Ownership
//!
//! The engine owns lifecycle logging for journal commands:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The store uses only `tracing::debug!()` for internal details.

#![allow(clippy::result_large_err)]

use crate::commands::router::{resolve_document_name, CommandKind, Route};
use statelog_core::errors::{ExError, JournalError};
use statelog_core::ops::ResolvedQuestion;
use statelog_core::{
    apply_append, apply_resolve, log_op_end, log_op_error, log_op_start, Clock, DocumentName,
    Field, Scope, StateDocument,
};
use statelog_core_types::RequestId;
use statelog_store::errors::Result;
use statelog_store::DocumentStore;

/// What to do when a resolve keyword matches no open question
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoMatchPolicy {
    /// Succeed without writing and report that nothing was resolved
    #[default]
    Report,
    /// Fail with `NoMatchFound`
    Fail,
}

/// A single mutating journal command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalCommand {
    /// Append a dated entry to one of the five appendable fields
    Append {
        scope: Scope,
        field: Field,
        text: String,
    },
    /// Move every open question containing `keyword` into `resolved`
    Resolve {
        scope: Scope,
        keyword: String,
        resolution: String,
        policy: NoMatchPolicy,
    },
}

impl JournalCommand {
    /// Build a command from a route and its text arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the argument count does not match the
    /// command, or if the route is the read-only `show`.
    pub fn from_route(
        route: Route,
        texts: &[String],
        policy: NoMatchPolicy,
    ) -> std::result::Result<Self, JournalError> {
        let kind = route.kind;
        if texts.len() != kind.arity() {
            return Err(JournalError::InvalidInput {
                reason: format!(
                    "{} takes {} text argument(s), got {}",
                    kind,
                    kind.arity(),
                    texts.len()
                ),
            });
        }

        match (kind, kind.field()) {
            (CommandKind::Resolve, _) => Ok(JournalCommand::Resolve {
                scope: route.scope,
                keyword: texts[0].clone(),
                resolution: texts[1].clone(),
                policy,
            }),
            (_, Some(field)) => Ok(JournalCommand::Append {
                scope: route.scope,
                field,
                text: texts[0].clone(),
            }),
            (_, None) => Err(JournalError::InvalidInput {
                reason: format!("{} does not modify a document", kind),
            }),
        }
    }

    pub fn scope(&self) -> &Scope {
        match self {
            JournalCommand::Append { scope, .. } | JournalCommand::Resolve { scope, .. } => scope,
        }
    }

    fn op(&self) -> &'static str {
        match self {
            JournalCommand::Append { .. } => "append",
            JournalCommand::Resolve { .. } => "resolve",
        }
    }

    fn validate(&self) -> std::result::Result<(), JournalError> {
        match self {
            JournalCommand::Append { field, .. } if !field.is_appendable() => {
                Err(JournalError::InvalidInput {
                    reason: format!("{} only grows through resolve", field.key()),
                })
            }
            JournalCommand::Resolve { keyword, .. } if keyword.is_empty() => {
                Err(JournalError::InvalidInput {
                    reason: "resolve keyword cannot be empty".to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// What a command changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// One entry appended
    Appended {
        field: Field,
        text: String,
        entry: String,
    },
    /// One or more open questions closed
    Resolved {
        resolution: String,
        resolved: Vec<ResolvedQuestion>,
    },
    /// Resolve matched nothing; the document was not written
    NothingResolved {
        keyword: String,
        open_questions: Vec<String>,
    },
}

/// Result of a journal command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub scope: Scope,
    pub document_name: DocumentName,
    /// The document as it now stands on disk (or would, for a no-op)
    pub document: StateDocument,
    pub change: Change,
    /// Whether the document was written
    pub persisted: bool,
}

/// Apply a journal command: load (or bootstrap) the target document,
/// mutate it, and write it back in one atomic replace
///
/// Every call runs under a fresh request id, attached to the log events
/// and to any returned error. Nothing is written when the command fails
/// or when a resolve matches nothing.
///
/// # Errors
///
/// - `InvalidInput`: empty resolve keyword, or an append to `resolved`
/// - `CorruptState`: the target document exists but does not parse
/// - `Io`: the target document exists but cannot be read
/// - `WriteFailure`: the document could not be replaced
/// - `NoMatchFound`: resolve matched nothing under `NoMatchPolicy::Fail`
pub fn apply_journal_command(
    cmd: JournalCommand,
    store: &DocumentStore,
    clock: &dyn Clock,
) -> Result<CommandOutcome> {
    let request_id = RequestId::new();
    let document_name = resolve_document_name(cmd.scope());
    let op = cmd.op();

    log_op_start!(
        op,
        document = document_name.as_str(),
        scope = %cmd.scope(),
        request_id = request_id.as_str()
    );
    let start = std::time::Instant::now();

    let result = apply_journal_command_impl(&cmd, &document_name, store, clock);

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(outcome) => {
            log_op_end!(
                op,
                duration_ms = elapsed,
                document = document_name.as_str(),
                persisted = outcome.persisted,
                request_id = request_id.as_str()
            );
        }
        Err(e) => log_op_error!(
            op,
            e.clone(),
            duration_ms = elapsed,
            document = document_name.as_str(),
            request_id = request_id.as_str()
        ),
    }

    result.map_err(|e| e.with_request_id(request_id))
}

fn apply_journal_command_impl(
    cmd: &JournalCommand,
    document_name: &DocumentName,
    store: &DocumentStore,
    clock: &dyn Clock,
) -> Result<CommandOutcome> {
    let with_document = |e: JournalError| ExError::from(e).with_document(document_name.as_str());

    cmd.validate().map_err(with_document)?;

    let mut document = store.load_or_create(document_name)?;
    let today = clock.today();

    let change = match cmd {
        JournalCommand::Append { field, text, .. } => {
            let entry = apply_append(&mut document, *field, text, today).map_err(with_document)?;
            Change::Appended {
                field: *field,
                text: text.clone(),
                entry,
            }
        }
        JournalCommand::Resolve {
            keyword,
            resolution,
            policy,
            ..
        } => {
            let outcome =
                apply_resolve(&mut document, keyword, resolution, today).map_err(with_document)?;

            if outcome.is_empty() {
                let open_questions = document.open_questions.clone();
                return match policy {
                    NoMatchPolicy::Fail => Err(with_document(JournalError::NoMatchFound {
                        keyword: keyword.clone(),
                        open_questions,
                    })),
                    NoMatchPolicy::Report => Ok(CommandOutcome {
                        scope: cmd.scope().clone(),
                        document_name: document_name.clone(),
                        document,
                        change: Change::NothingResolved {
                            keyword: keyword.clone(),
                            open_questions,
                        },
                        persisted: false,
                    }),
                };
            }

            tracing::debug!(
                document = document_name.as_str(),
                matched = outcome.matched(),
                "open questions resolved"
            );
            Change::Resolved {
                resolution: resolution.clone(),
                resolved: outcome.resolved,
            }
        }
    };

    stamp_subsystem(&mut document, cmd.scope());
    store.write(document_name, &document)?;

    Ok(CommandOutcome {
        scope: cmd.scope().clone(),
        document_name: document_name.clone(),
        document,
        change,
        persisted: true,
    })
}

/// Record which subsystem a document belongs to, if it does not say yet
fn stamp_subsystem(document: &mut StateDocument, scope: &Scope) {
    if let (Some(id), None) = (scope.subsystem(), &document.subsystem) {
        document.subsystem = Some(id.to_string());
    }
}

/// Read the whole document for a scope without modifying anything
///
/// A document that does not exist yet reads as empty and is not created.
///
/// # Errors
///
/// - `CorruptState`: the document exists but does not parse
/// - `Io`: the document exists but cannot be read
pub fn read_document(scope: &Scope, store: &DocumentStore) -> Result<(DocumentName, StateDocument)> {
    let request_id = RequestId::new();
    let document_name = resolve_document_name(scope);

    log_op_start!(
        "show",
        document = document_name.as_str(),
        request_id = request_id.as_str()
    );
    let start = std::time::Instant::now();

    let result = store.load_or_create(&document_name);

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(
                "show",
                duration_ms = elapsed,
                request_id = request_id.as_str()
            );
        }
        Err(e) => log_op_error!(
            "show",
            e.clone(),
            duration_ms = elapsed,
            request_id = request_id.as_str()
        ),
    }

    result
        .map(|document| (document_name, document))
        .map_err(|e| e.with_request_id(request_id))
}
