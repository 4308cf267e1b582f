// ⭐ Capital-Change Detector
// Applies the attribute-history resolver to the share-capital history of
// one company extract and enriches each hit with company identity.

use crate::extract::CompanyExtract;
use crate::index::EntryIndex;
use crate::resolver::AttributeHistoryResolver;
use crate::window::DateWindow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shown when a broken extract carries no usable company name at all
const NAME_UNAVAILABLE: &str = "(name unavailable)";

// ============================================================================
// CHANGE EVENT
// ============================================================================

/// ChangeEvent - One detected share-capital change
///
/// Immutable once constructed; the caller concatenates events across
/// companies and hands them to the report renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub company_name: String,
    pub registry_id: String,
    pub change_date: NaiveDate,
    pub new_value: String,
    /// None when the replaced value could not be determined (expected for
    /// a capital that changed only once since incorporation)
    pub previous_value: Option<String>,
}

impl ChangeEvent {
    pub fn summary(&self) -> String {
        format!(
            "{} (KRS {}): capital {} -> {} on {}",
            self.company_name,
            self.registry_id,
            self.previous_value.as_deref().unwrap_or("unknown"),
            self.new_value,
            self.change_date.format("%d.%m.%Y")
        )
    }
}

// ============================================================================
// DETECTOR
// ============================================================================

/// CapitalChangeDetector - pure per-company analysis
///
/// Never fails: every malformed field or absent section degrades to
/// "no event for that candidate/company". One bad extract must not be
/// able to halt a batch of many.
#[derive(Debug, Clone, Default)]
pub struct CapitalChangeDetector {
    resolver: AttributeHistoryResolver,
}

impl CapitalChangeDetector {
    pub fn new() -> Self {
        CapitalChangeDetector {
            resolver: AttributeHistoryResolver::new(),
        }
    }

    /// All share-capital changes of `extract` introduced inside `window`,
    /// most recent first.
    pub fn detect(&self, extract: &CompanyExtract, window: &DateWindow) -> Vec<ChangeEvent> {
        // A single-record history has never changed under this model;
        // skip the window checks entirely.
        if extract.capital_history.len() < 2 {
            return Vec::new();
        }

        let index = EntryIndex::from_entries(&extract.entries);
        let mut changes = self
            .resolver
            .changes_within(&extract.capital_history, &index, window);

        // Ordering is a contract: most recent change first. Entry numbers
        // break date ties so repeat runs are byte-stable.
        changes.sort_by(|a, b| {
            b.change_date
                .cmp(&a.change_date)
                .then(b.entry_number.cmp(&a.entry_number))
        });

        let company_name = extract
            .current_name()
            .unwrap_or(NAME_UNAVAILABLE)
            .to_string();

        changes
            .into_iter()
            .map(|change| ChangeEvent {
                company_name: company_name.clone(),
                registry_id: extract.registry_id.clone(),
                change_date: change.change_date,
                new_value: change.record.value,
                previous_value: change.previous.map(|record| record.value),
            })
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
