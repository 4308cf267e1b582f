// ⏰ Date Window - the inclusive range a change must fall into
// to be reportable.

use chrono::{Duration, NaiveDate};

/// DateWindow - closed interval [start, end], inclusive both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateWindow { start, end }
    }

    /// Trailing window of `days` calendar days ending at `end`.
    /// A 1-day window covers exactly `end`.
    pub fn trailing_days(end: NaiveDate, days: u32) -> Self {
        let span = i64::from(days.max(1)) - 1;
        DateWindow {
            start: end - Duration::days(span),
            end,
        }
    }

    /// Both boundary dates count as in-window
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Human-readable range in registry date format
    pub fn describe(&self) -> String {
        format!(
            "{} to {}",
            self.start.format("%d.%m.%Y"),
            self.end.format("%d.%m.%Y")
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
