// 🏛️ KRS Extract Model
// Serde model of the registry's "odpis pełny" JSON plus the unified
// attribute-record view the analysis engines work on.
//
// The registry document carries two independently maintained lists:
// - the entry log (odpis.naglowekP.wpis): dated filings, keyed by number
// - per-attribute histories (capital, company name): values bracketed by
//   the entry numbers that introduced and withdrew them
// The lists are correlated only through those integer entry numbers.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

/// Date format used throughout the registry extract (e.g. "17.03.2025")
pub const REGISTRY_DATE_FORMAT: &str = "%d.%m.%Y";

// ============================================================================
// RAW DOCUMENT (wire shape)
// ============================================================================

/// FullExtract - Root of the registry JSON document
///
/// Every nested section is optional: upstream extracts are frequently
/// partial, and a missing subtree means "nothing recorded", never a
/// parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FullExtract {
    pub odpis: Option<ExtractHeader>,
    pub dane: Option<ExtractData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractHeader {
    #[serde(rename = "naglowekP")]
    pub header: Option<HeaderSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeaderSection {
    /// Registry number of the company ("numerKRS")
    #[serde(rename = "numerKRS")]
    pub registry_id: Option<Value>,

    /// Append-only entry log: one element per registration-court filing
    #[serde(rename = "wpis", default)]
    pub entries: Vec<RawEntry>,
}

/// RawEntry - One filing in the company's audit-log timeline
///
/// Both fields stay raw here: the registry sometimes delivers entry
/// numbers as strings, sometimes as numbers, and occasionally malformed.
/// Interpretation happens at index-build time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    #[serde(rename = "numerWpisu")]
    pub number: Option<Value>,

    #[serde(rename = "dataWpisu")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractData {
    #[serde(rename = "dzial1")]
    pub section1: Option<Section1>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Section1 {
    #[serde(rename = "kapital")]
    pub capital: Option<CapitalSection>,

    #[serde(rename = "danePodmiotu")]
    pub subject: Option<SubjectSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CapitalSection {
    /// Share-capital history ("wysokoscKapitaluZakladowego")
    #[serde(rename = "wysokoscKapitaluZakladowego", default)]
    pub share_capital: Vec<RawVersionedValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectSection {
    /// Company-name history ("nazwa")
    #[serde(rename = "nazwa", default)]
    pub names: Vec<RawVersionedValue>,
}

/// RawVersionedValue - One historical value of a mutable attribute
///
/// Capital records carry the value in "wartosc", name records in "nazwa";
/// both use "nrWpisuWprow"/"nrWpisuWykr" for the introducing/withdrawing
/// entry references.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVersionedValue {
    #[serde(rename = "wartosc")]
    pub amount: Option<Value>,

    #[serde(rename = "nazwa")]
    pub name: Option<Value>,

    #[serde(rename = "nrWpisuWprow")]
    pub introduced_by: Option<Value>,

    #[serde(rename = "nrWpisuWykr")]
    pub withdrawn_by: Option<Value>,
}

// ============================================================================
// LENIENT FIELD PARSING
// ============================================================================

/// Parse an entry-number reference that may arrive as a JSON number or a
/// numeric string. Negative values and garbage yield None.
pub fn parse_entry_ref(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().filter(|n| *n >= 0),
        Value::String(s) => s.trim().parse::<i64>().ok().filter(|n| *n >= 0),
        _ => None,
    }
}

/// Parse a registry date ("dd.mm.yyyy"). Unparseable input yields None.
pub fn parse_registry_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), REGISTRY_DATE_FORMAT).ok()
}

/// Render a JSON scalar for display (strings unquoted, null empty).
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// ============================================================================
// UNIFIED ATTRIBUTE RECORD
// ============================================================================

/// AttributeRecord - One historical value of a mutable company attribute
///
/// Modeled identically for every attribute kind (capital amount, legal
/// name). Validity is bracketed by entry numbers:
/// - `introduced_by`: entry that brought the value into force (absent for
///   values present since incorporation)
/// - `withdrawn_by`: entry that superseded it (absent for the current value)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRecord {
    pub value: String,
    pub introduced_by: Option<i64>,
    pub withdrawn_by: Option<i64>,
}

impl AttributeRecord {
    pub fn new(value: impl Into<String>) -> Self {
        AttributeRecord {
            value: value.into(),
            introduced_by: None,
            withdrawn_by: None,
        }
    }

    /// Builder: set the introducing entry number
    pub fn introduced_by(mut self, entry_number: i64) -> Self {
        self.introduced_by = Some(entry_number);
        self
    }

    /// Builder: set the withdrawing entry number
    pub fn withdrawn_by(mut self, entry_number: i64) -> Self {
        self.withdrawn_by = Some(entry_number);
        self
    }

    /// A record with no withdrawing entry holds the current value
    pub fn is_current(&self) -> bool {
        self.withdrawn_by.is_none()
    }
}

impl From<&RawVersionedValue> for AttributeRecord {
    fn from(raw: &RawVersionedValue) -> Self {
        let value = raw
            .amount
            .as_ref()
            .or(raw.name.as_ref())
            .map(display_value)
            .unwrap_or_default();

        AttributeRecord {
            value,
            introduced_by: raw.introduced_by.as_ref().and_then(parse_entry_ref),
            withdrawn_by: raw.withdrawn_by.as_ref().and_then(parse_entry_ref),
        }
    }
}

// ============================================================================
// COMPANY EXTRACT (domain view)
// ============================================================================

/// CompanyExtract - One company's registry document, normalized
///
/// Entries stay raw (the index builder interprets them); attribute
/// histories are unified into AttributeRecords. Missing sections become
/// empty lists, so downstream analysis never distinguishes "absent
/// subtree" from "nothing recorded".
#[derive(Debug, Clone, Default)]
pub struct CompanyExtract {
    pub registry_id: String,
    pub entries: Vec<RawEntry>,
    pub capital_history: Vec<AttributeRecord>,
    pub name_history: Vec<AttributeRecord>,
}

impl CompanyExtract {
    /// Normalize a raw document. `requested_id` is the identifier the
    /// caller asked for; it backfills a header missing "numerKRS".
    pub fn from_raw(raw: FullExtract, requested_id: &str) -> Self {
        let header = raw.odpis.and_then(|o| o.header);

        let registry_id = header
            .as_ref()
            .and_then(|h| h.registry_id.as_ref())
            .map(display_value)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| requested_id.to_string());

        let entries = header.map(|h| h.entries).unwrap_or_default();

        let section1 = raw.dane.and_then(|d| d.section1);

        let capital_history = section1
            .as_ref()
            .and_then(|s| s.capital.as_ref())
            .map(|c| c.share_capital.iter().map(AttributeRecord::from).collect())
            .unwrap_or_default();

        let name_history = section1
            .as_ref()
            .and_then(|s| s.subject.as_ref())
            .map(|s| s.names.iter().map(AttributeRecord::from).collect())
            .unwrap_or_default();

        CompanyExtract {
            registry_id,
            entries,
            capital_history,
            name_history,
        }
    }

    /// Current company name: the name record with no withdrawing entry.
    /// Multiple current records (a data anomaly) resolve to the first
    /// encountered; none at all falls back to the earliest recorded name.
    pub fn current_name(&self) -> Option<&str> {
        self.name_history
            .iter()
            .find(|record| record.is_current())
            .or_else(|| self.name_history.first())
            .map(|record| record.value.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract_from(value: serde_json::Value) -> CompanyExtract {
        let raw: FullExtract = serde_json::from_value(value).unwrap();
        CompanyExtract::from_raw(raw, "0000999999")
    }

    #[test]
    fn test_parse_entry_ref_accepts_numbers_and_strings() {
        assert_eq!(parse_entry_ref(&json!(7)), Some(7));
        assert_eq!(parse_entry_ref(&json!("12")), Some(12));
        assert_eq!(parse_entry_ref(&json!(" 3 ")), Some(3));
        assert_eq!(parse_entry_ref(&json!(0)), Some(0));
    }

    #[test]
    fn test_parse_entry_ref_rejects_garbage() {
        assert_eq!(parse_entry_ref(&json!(-1)), None);
        assert_eq!(parse_entry_ref(&json!("-4")), None);
        assert_eq!(parse_entry_ref(&json!("abc")), None);
        assert_eq!(parse_entry_ref(&json!(null)), None);
        assert_eq!(parse_entry_ref(&json!([1])), None);
    }

    #[test]
    fn test_parse_registry_date() {
        assert_eq!(
            parse_registry_date("17.03.2025"),
            NaiveDate::from_ymd_opt(2025, 3, 17)
        );
        assert_eq!(parse_registry_date("2025-03-17"), None);
        assert_eq!(parse_registry_date("31.02.2025"), None);
        assert_eq!(parse_registry_date(""), None);
    }

    #[test]
    fn test_full_document_normalization() {
        let extract = extract_from(json!({
            "odpis": {
                "naglowekP": {
                    "numerKRS": "0000123456",
                    "wpis": [
                        {"numerWpisu": 1, "dataWpisu": "01.06.2020"},
                        {"numerWpisu": "7", "dataWpisu": "15.02.2025"}
                    ]
                }
            },
            "dane": {
                "dzial1": {
                    "danePodmiotu": {
                        "nazwa": [
                            {"nazwa": "ALFA SP. Z O.O.", "nrWpisuWprow": 1}
                        ]
                    },
                    "kapital": {
                        "wysokoscKapitaluZakladowego": [
                            {"wartosc": "100000,00", "nrWpisuWprow": 1, "nrWpisuWykr": 7},
                            {"wartosc": "250000,00", "nrWpisuWprow": 7}
                        ]
                    }
                }
            }
        }));

        assert_eq!(extract.registry_id, "0000123456");
        assert_eq!(extract.entries.len(), 2);
        assert_eq!(extract.capital_history.len(), 2);
        assert_eq!(extract.name_history.len(), 1);

        let current = &extract.capital_history[1];
        assert_eq!(current.value, "250000,00");
        assert_eq!(current.introduced_by, Some(7));
        assert!(current.is_current());

        let withdrawn = &extract.capital_history[0];
        assert_eq!(withdrawn.withdrawn_by, Some(7));
        assert!(!withdrawn.is_current());
    }

    #[test]
    fn test_missing_sections_become_empty_histories() {
        let extract = extract_from(json!({}));

        assert_eq!(extract.registry_id, "0000999999");
        assert!(extract.entries.is_empty());
        assert!(extract.capital_history.is_empty());
        assert!(extract.name_history.is_empty());
        assert_eq!(extract.current_name(), None);
    }

    #[test]
    fn test_missing_capital_subtree_only() {
        let extract = extract_from(json!({
            "odpis": {"naglowekP": {"wpis": [{"numerWpisu": 1, "dataWpisu": "01.06.2020"}]}},
            "dane": {"dzial1": {}}
        }));

        // Header present but no numerKRS: requested id backfills
        assert_eq!(extract.registry_id, "0000999999");
        assert_eq!(extract.entries.len(), 1);
        assert!(extract.capital_history.is_empty());
    }

    #[test]
    fn test_current_name_resolution() {
        let extract = extract_from(json!({
            "dane": {"dzial1": {"danePodmiotu": {"nazwa": [
                {"nazwa": "OLD NAME SP. Z O.O.", "nrWpisuWprow": 1, "nrWpisuWykr": 5},
                {"nazwa": "NEW NAME SP. Z O.O.", "nrWpisuWprow": 5}
            ]}}}
        }));

        assert_eq!(extract.current_name(), Some("NEW NAME SP. Z O.O."));
    }

    #[test]
    fn test_current_name_anomaly_picks_first() {
        // Two records without a withdrawing entry: first encountered wins
        let extract = extract_from(json!({
            "dane": {"dzial1": {"danePodmiotu": {"nazwa": [
                {"nazwa": "FIRST CURRENT"},
                {"nazwa": "SECOND CURRENT"}
            ]}}}
        }));

        assert_eq!(extract.current_name(), Some("FIRST CURRENT"));
    }

    #[test]
    fn test_current_name_fallback_when_all_withdrawn() {
        let extract = extract_from(json!({
            "dane": {"dzial1": {"danePodmiotu": {"nazwa": [
                {"nazwa": "ONLY NAME", "nrWpisuWprow": 1, "nrWpisuWykr": 2}
            ]}}}
        }));

        assert_eq!(extract.current_name(), Some("ONLY NAME"));
    }

    #[test]
    fn test_numeric_registry_id_and_capital() {
        let extract = extract_from(json!({
            "odpis": {"naglowekP": {"numerKRS": 123456}},
            "dane": {"dzial1": {"kapital": {"wysokoscKapitaluZakladowego": [
                {"wartosc": 50000, "nrWpisuWprow": "2"}
            ]}}}
        }));

        assert_eq!(extract.registry_id, "123456");
        assert_eq!(extract.capital_history[0].value, "50000");
        assert_eq!(extract.capital_history[0].introduced_by, Some(2));
    }

    #[test]
    fn test_attribute_record_builder() {
        let record = AttributeRecord::new("100000,00").introduced_by(3).withdrawn_by(9);

        assert_eq!(record.value, "100000,00");
        assert_eq!(record.introduced_by, Some(3));
        assert_eq!(record.withdrawn_by, Some(9));
        assert!(!record.is_current());
    }
}
