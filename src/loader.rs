//! Data loading for boundary and representative files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::models::{BoundaryFeature, RepRecord};

#[derive(Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<serde_json::Value>,
}

/// Everything the lookup service needs, loaded once at startup and
/// immutable afterwards.
pub struct DataStore {
    /// Boundary features in file order. Order matters for first-match-wins.
    pub boundaries: Vec<BoundaryFeature>,
    /// Boundary name → representative record.
    pub boundary_records: HashMap<String, RepRecord>,
    /// Region name → representative record.
    pub region_records: HashMap<String, RepRecord>,
}

impl DataStore {
    pub fn load<P: AsRef<Path>>(
        boundaries: P,
        boundary_records: P,
        region_records: P,
    ) -> Result<Self> {
        Ok(Self {
            boundaries: load_boundaries(boundaries)?,
            boundary_records: load_records(boundary_records)?,
            region_records: load_records(region_records)?,
        })
    }
}

/// Load a GeoJSON FeatureCollection, keeping file order.
///
/// Features are deserialized one at a time so a single malformed entry is
/// skipped with a warning instead of aborting startup.
pub fn load_boundaries<P: AsRef<Path>>(path: P) -> Result<Vec<BoundaryFeature>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let collection: FeatureCollection = serde_json::from_str(&content)
        .with_context(|| format!("invalid GeoJSON in {}", path.display()))?;

    let mut features = Vec::with_capacity(collection.features.len());
    for (idx, raw) in collection.features.into_iter().enumerate() {
        match serde_json::from_value::<BoundaryFeature>(raw) {
            Ok(feature) => features.push(feature),
            Err(err) => warn!("skipping malformed feature {idx} in {}: {err}", path.display()),
        }
    }

    info!("loaded {} boundary features from {}", features.len(), path.display());
    Ok(features)
}

/// Load a JSON map of display name → representative record.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<HashMap<String, RepRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let records: HashMap<String, RepRecord> = serde_json::from_str(&content)
        .with_context(|| format!("invalid record data in {}", path.display()))?;

    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_malformed_feature_skipped() {
        let file = write_temp(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {"type": "Feature", "properties": {"AC_NAME": "Bad"},
                     "geometry": {"type": "Polygon", "coordinates": [[[77.5]]]}},
                    {"type": "Feature", "properties": {"AC_NAME": "Good"},
                     "geometry": {"type": "Polygon",
                                  "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}}
                ]
            }"#,
        );

        let features = load_boundaries(file.path()).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].name(), Some("Good"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_boundaries("/nonexistent/boundaries.geojson").is_err());
    }

    #[test]
    fn test_load_records() {
        let file = write_temp(
            r#"{"Shivajinagar": {"name": "Rizwan Arshad", "party": "INC",
                                 "constituency": "Shivajinagar"}}"#,
        );
        let records = load_records(file.path()).unwrap();
        assert_eq!(records["Shivajinagar"].name, "Rizwan Arshad");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let file = write_temp("not json");
        assert!(load_records(file.path()).is_err());
    }
}
