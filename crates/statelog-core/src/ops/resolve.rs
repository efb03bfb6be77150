//! Resolve operation
//!
//! Moves open questions into `resolved`. The keyword is a search key, not
//! an identifier: every open question whose stored text contains it
//! (case-sensitive, date prefix included) is closed by one call.

use crate::clock::dated_entry;
use crate::errors::{JournalError, Result};
use crate::model::StateDocument;
use chrono::NaiveDate;

/// Separator between the original question and its resolution
pub const RESOLUTION_SEPARATOR: &str = " → Decided: ";

/// One question closed by a resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuestion {
    /// The open-question entry as it was stored
    pub question: String,
    /// The entry appended to `resolved`
    pub entry: String,
}

/// Result of a resolve, in original question order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOutcome {
    pub resolved: Vec<ResolvedQuestion>,
}

impl ResolveOutcome {
    pub fn matched(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}

/// Close every open question containing `keyword`
///
/// Each match is removed from `open_questions` and
/// `"{today} - {question} → Decided: {resolution}"` is appended to
/// `resolved`, preserving the original order. Zero matches leaves the
/// document untouched and returns an empty outcome; whether that is an
/// error is the caller's policy.
///
/// # Errors
///
/// Returns `InvalidInput` if `keyword` is empty, since it would match
/// every open question.
pub fn apply_resolve(
    document: &mut StateDocument,
    keyword: &str,
    resolution: &str,
    today: NaiveDate,
) -> Result<ResolveOutcome> {
    if keyword.is_empty() {
        return Err(JournalError::InvalidInput {
            reason: "resolve keyword cannot be empty".to_string(),
        });
    }

    let (matched, remaining): (Vec<String>, Vec<String>) = document
        .open_questions
        .drain(..)
        .partition(|q| q.contains(keyword));
    document.open_questions = remaining;

    let resolved: Vec<ResolvedQuestion> = matched
        .into_iter()
        .map(|question| {
            let entry = dated_entry(
                today,
                &format!("{}{}{}", question, RESOLUTION_SEPARATOR, resolution),
            );
            ResolvedQuestion { question, entry }
        })
        .collect();

    document
        .resolved
        .extend(resolved.iter().map(|r| r.entry.clone()));

    Ok(ResolveOutcome { resolved })
}
