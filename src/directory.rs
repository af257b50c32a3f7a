//! Tiered record lookup with key normalization.

use std::collections::HashMap;
use tracing::debug;

use crate::models::RepRecord;

/// Strip a trailing parenthetical reservation qualifier and re-trim.
/// `"Anekal (SC)"` and `"Pulakeshinagar(SC)"` both normalize to the bare
/// name.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.ends_with(')') {
        if let Some(idx) = trimmed.rfind('(') {
            return trimmed[..idx].trim().to_string();
        }
    }
    trimmed.to_string()
}

/// Look a name up against a record set: exact key first, then the
/// normalized key, then a case-insensitive scan.
///
/// Never fails: a total miss produces a placeholder with the full field
/// set, so callers need no special case for missing data.
pub fn resolve(name: &str, records: &HashMap<String, RepRecord>) -> RepRecord {
    if let Some(record) = records.get(name) {
        return record.clone();
    }

    let normalized = normalize_name(name);
    if let Some(record) = records.get(&normalized) {
        debug!(name, normalized, "record found under normalized key");
        return record.clone();
    }

    if let Some((key, record)) = records
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(&normalized))
    {
        debug!(name, key, "record found via case-insensitive scan");
        return record.clone();
    }

    debug!(name, "no record found, returning placeholder");
    let display = if normalized.is_empty() { name } else { &normalized };
    RepRecord::placeholder(display)
}
