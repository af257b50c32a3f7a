//! Boundary features extracted from GeoJSON.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::geometry::Geometry;

/// Property keys tried, in order, when extracting a feature's display name.
/// Boundary files from different sources disagree on casing.
const NAME_KEYS: &[&str] = &["AC_NAME", "AC_Name", "ac_name", "NAME", "Name", "name"];

/// Property keys tried for the constituency code/number.
const CODE_KEYS: &[&str] = &["AC_Code", "AC_NO", "ac_no"];

/// One administrative boundary: a polygon-family geometry plus the raw
/// property bag it was loaded with. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryFeature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
    pub geometry: Geometry,
}

fn feature_type() -> String {
    "Feature".to_string()
}

impl BoundaryFeature {
    /// Display name: first present, non-empty value among the known
    /// property-key variants.
    pub fn name(&self) -> Option<&str> {
        NAME_KEYS.iter().find_map(|key| {
            self.properties
                .get(*key)
                .and_then(|v| v.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
        })
    }

    /// Constituency code, accepting either string or numeric JSON values.
    pub fn code(&self) -> Option<String> {
        CODE_KEYS.iter().find_map(|key| match self.properties.get(*key) {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }
}
