// 🗂️ Entry Index - entry number → entry date
// Built once per extract, then shared by every attribute lookup.
// Replaces repeated linear scans over the entry log with an explicit,
// separately testable mapping.

use crate::extract::{parse_entry_ref, parse_registry_date, RawEntry};
use chrono::NaiveDate;
use std::collections::HashMap;

/// EntryIndex - Lookup table over a company's entry log
///
/// Only entries with a parseable, non-negative number AND a parseable
/// date are indexed; anything else is skipped silently. Upstream data is
/// partial often enough that robustness beats strictness here.
///
/// Duplicate entry numbers should not occur (numbers are assigned
/// monotonically at filing time) but are not verified: the last one
/// inserted wins.
#[derive(Debug, Clone, Default)]
pub struct EntryIndex {
    dates: HashMap<i64, NaiveDate>,
}

impl EntryIndex {
    /// Build the index from the raw entry list
    pub fn from_entries(entries: &[RawEntry]) -> Self {
        let mut dates = HashMap::with_capacity(entries.len());

        for entry in entries {
            let number = match entry.number.as_ref().and_then(parse_entry_ref) {
                Some(n) => n,
                None => continue,
            };
            let date = match entry.date.as_deref().and_then(parse_registry_date) {
                Some(d) => d,
                None => continue,
            };
            dates.insert(number, date);
        }

        EntryIndex { dates }
    }

    /// Date of the given entry, if it was indexed
    pub fn date_of(&self, entry_number: i64) -> Option<NaiveDate> {
        self.dates.get(&entry_number).copied()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
