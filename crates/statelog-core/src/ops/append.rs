//! Append operation

use crate::clock::dated_entry;
use crate::errors::{JournalError, Result};
use crate::model::{Field, StateDocument};
use chrono::NaiveDate;

/// Append a dated entry to one of the five appendable fields
///
/// The entry is `"{today} - {text}"`, pushed at the end of the field.
/// `text` is stored as given, including the empty string.
///
/// Returns the stored entry.
///
/// # Errors
///
/// Returns `InvalidInput` if `field` is `Resolved`, which only grows
/// through [`apply_resolve`](crate::ops::apply_resolve).
pub fn apply_append(
    document: &mut StateDocument,
    field: Field,
    text: &str,
    today: NaiveDate,
) -> Result<String> {
    if !field.is_appendable() {
        return Err(JournalError::InvalidInput {
            reason: format!("{} only grows through resolve", field.key()),
        });
    }

    let entry = dated_entry(today, text);
    document.entries_mut(field).push(entry.clone());
    Ok(entry)
}
