//! Confirmation lines printed after a command

use crate::commands::engine_command::{Change, CommandOutcome};
use std::fmt::Write;

/// Text of an entry without its leading `YYYY-MM-DD - ` stamp
pub fn strip_date(entry: &str) -> &str {
    entry.split_once(" - ").map_or(entry, |(_, text)| text)
}

/// Render the confirmation for a command outcome
///
/// ```text
/// ✓ Added to what_we_decided [tracking]: Use JSON
/// ✓ Resolved: Cache results?
///   Decision: Cache by DOI
/// ✗ No question found matching: 'caching'
/// ```
pub fn render_confirmation(outcome: &CommandOutcome) -> String {
    let label = outcome.scope.label();
    let mut out = String::new();

    match &outcome.change {
        Change::Appended { field, text, .. } => {
            let _ = write!(out, "✓ Added to {}{}: {}", field.key(), label, text);
        }
        Change::Resolved {
            resolution,
            resolved,
        } => {
            for r in resolved {
                let _ = writeln!(out, "✓ Resolved{}: {}", label, strip_date(&r.question));
            }
            let _ = write!(out, "  Decision: {}", resolution);
        }
        Change::NothingResolved {
            keyword,
            open_questions,
        } => {
            let _ = write!(out, "✗ No question found matching{}: '{}'", label, keyword);
            if !open_questions.is_empty() {
                out.push_str("\n\nOpen questions:");
                for q in open_questions {
                    let _ = write!(out, "\n  • {}", q);
                }
            }
        }
    }

    out
}
