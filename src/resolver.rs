// ⚖️ Attribute-History Resolver
// Finds the records of one attribute kind that were introduced inside a
// date window, and what value each one replaced. Works identically for
// capital amounts, company names, or any other versioned attribute.

use crate::extract::AttributeRecord;
use crate::index::EntryIndex;
use crate::window::DateWindow;
use chrono::NaiveDate;

// ============================================================================
// RESOLVED CHANGE
// ============================================================================

/// ResolvedChange - One in-window introduction of an attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChange {
    /// The record that came into force
    pub record: AttributeRecord,

    /// Entry that introduced it (always resolvable: candidates whose
    /// introduction date is unknown never become changes)
    pub entry_number: i64,

    /// Date of the introducing entry
    pub change_date: NaiveDate,

    /// The record this one replaced; None for the first recorded value
    /// of an attribute (expected, not an error)
    pub previous: Option<AttributeRecord>,
}

// ============================================================================
// RESOLVER
// ============================================================================

/// AttributeHistoryResolver - pure, stateless window scan
///
/// Contract:
/// - every qualifying record is returned, never collapsed to the latest
/// - a record whose `introduced_by` is absent or does not resolve in the
///   index is excluded ("date unknown" is never treated as in-window)
/// - results keep the history's own order; callers impose their own sort
#[derive(Debug, Clone, Default)]
pub struct AttributeHistoryResolver;

impl AttributeHistoryResolver {
    pub fn new() -> Self {
        AttributeHistoryResolver
    }

    /// All records of `history` introduced inside `window`
    pub fn changes_within(
        &self,
        history: &[AttributeRecord],
        index: &EntryIndex,
        window: &DateWindow,
    ) -> Vec<ResolvedChange> {
        let mut changes = Vec::new();

        for record in history {
            let entry_number = match record.introduced_by {
                Some(n) => n,
                None => continue,
            };
            let change_date = match index.date_of(entry_number) {
                Some(d) => d,
                None => continue,
            };
            if !window.contains(change_date) {
                continue;
            }

            changes.push(ResolvedChange {
                record: record.clone(),
                entry_number,
                change_date,
                previous: self.previous_record(history, entry_number),
            });
        }

        changes
    }

    /// The record withdrawn by `entry_number`, i.e. the value the new one
    /// replaced. Multiple matches should not occur per the data model,
    /// but upstream data is not guaranteed clean: the match with the
    /// numerically highest `introduced_by` wins (records lacking one rank
    /// lowest), picking the most recent prior value.
    fn previous_record(
        &self,
        history: &[AttributeRecord],
        entry_number: i64,
    ) -> Option<AttributeRecord> {
        history
            .iter()
            .filter(|record| record.withdrawn_by == Some(entry_number))
            .max_by_key(|record| record.introduced_by.unwrap_or(-1))
            .cloned()
    }
}

// ============================================================================
// TESTS
// ============================================================================
