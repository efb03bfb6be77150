//! Clock trait and implementations
//!
//! Entry dates come from a `Clock` owned by the engine, never from the
//! caller of a journal command.

use chrono::NaiveDate;

/// Date format prefixed to every stored entry (sortable as a string)
pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of the current calendar date
pub trait Clock {
    /// Today's date as the journal should record it
    fn today(&self) -> NaiveDate;
}

/// Clock reading the local calendar date
///
/// # Example
/// ```
/// use statelog_core::clock::{Clock, SystemClock};
///
/// let today = SystemClock.today();
/// assert!(today.format("%Y").to_string().len() == 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to one date
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use statelog_core::clock::{Clock, FixedClock};
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 8).unwrap();
/// assert_eq!(FixedClock::new(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Prefix `text` with `date` in the entry format: `YYYY-MM-DD - text`
pub fn dated_entry(date: NaiveDate, text: &str) -> String {
    format!("{} - {}", date.format(ENTRY_DATE_FORMAT), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dated_entry_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        assert_eq!(dated_entry(date, "Use JSON"), "2026-03-04 - Use JSON");
    }

    #[test]
    fn test_dated_entry_keeps_empty_text() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        assert_eq!(dated_entry(date, ""), "2026-03-04 - ");
    }
}
