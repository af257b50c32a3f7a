//! Representative metadata records.

use serde::{Deserialize, Serialize};

/// Sentinel for fields with no data behind them.
pub const NOT_AVAILABLE: &str = "Data not available";

/// Metadata for one representative. Also the shape of the placeholder
/// returned on a total lookup miss, so callers never branch on a missing
/// record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepRecord {
    #[serde(default = "not_available")]
    pub name: String,
    #[serde(default = "no_party")]
    pub party: String,
    #[serde(default)]
    pub constituency: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub constituency_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub office_address: Option<String>,
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

fn no_party() -> String {
    "N/A".to_string()
}

impl RepRecord {
    /// Structurally complete record with "not available" sentinels.
    pub fn placeholder(constituency: &str) -> Self {
        Self {
            name: not_available(),
            party: no_party(),
            constituency: constituency.to_string(),
            constituency_number: None,
            contact: None,
            email: None,
            office_address: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_fields() {
        let record = RepRecord::placeholder("Shivajinagar");
        assert_eq!(record.name, NOT_AVAILABLE);
        assert_eq!(record.party, "N/A");
        assert_eq!(record.constituency, "Shivajinagar");
        assert!(record.contact.is_none());
        assert!(record.email.is_none());
        assert!(record.office_address.is_none());
    }

    #[test]
    fn test_deserialize_partial_record() {
        let record: RepRecord =
            serde_json::from_str(r#"{"name": "Rizwan Arshad", "party": "INC"}"#).unwrap();
        assert_eq!(record.name, "Rizwan Arshad");
        assert!(record.constituency_number.is_none());
    }

    #[test]
    fn test_missing_fields_get_sentinels() {
        let record: RepRecord = serde_json::from_str(r#"{"constituency": "Hebbal"}"#).unwrap();
        assert_eq!(record.name, NOT_AVAILABLE);
        assert_eq!(record.party, "N/A");
    }
}
