//! Coordinate-to-representative resolution.
//!
//! Chains the PIP boundary scan, the region table, and the tiered record
//! lookup into one call, memoized per coordinate.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cache::{coordinate_key, QueryCache};
use crate::directory;
use crate::loader::DataStore;
use crate::models::{BoundaryFeature, Geometry, Point, RepRecord};
use crate::pip::locate;
use crate::regions::RegionTable;

/// Result of resolving one coordinate. Both fields are `None` exactly when
/// the point fell outside every known boundary; any internal record miss
/// yields a placeholder instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResult {
    pub mla: Option<RepRecord>,
    pub mp: Option<RepRecord>,
}

impl LookupResult {
    fn miss() -> Self {
        Self { mla: None, mp: None }
    }
}

/// Lookup service over an immutable dataset.
///
/// The dataset and region table are injected at construction and never
/// mutated, so concurrent lookups need no synchronization beyond the
/// cache's own mutex.
pub struct LookupService {
    store: Arc<DataStore>,
    regions: RegionTable,
    cache: QueryCache<LookupResult>,
}

impl LookupService {
    pub fn new(store: Arc<DataStore>, regions: RegionTable, cache_ttl: Duration) -> Self {
        info!(
            boundaries = store.boundaries.len(),
            mappings = regions.len(),
            "lookup service initialized"
        );
        Self {
            store,
            regions,
            cache: QueryCache::new(cache_ttl),
        }
    }

    /// Resolve a coordinate to its boundary and region records, consulting
    /// the cache first.
    pub fn resolve_point(&self, lat: f64, lon: f64) -> LookupResult {
        let key = coordinate_key(lat, lon);
        self.cache
            .get_or_compute(&key, || self.resolve_uncached(lat, lon))
    }

    fn resolve_uncached(&self, lat: f64, lon: f64) -> LookupResult {
        // GeoJSON positions are (longitude, latitude), not (lat, lon)
        let point = Point::new(lon, lat);

        let Some(feature) = locate(point, &self.store.boundaries) else {
            debug!(lat, lon, "no boundary contains the point");
            return LookupResult::miss();
        };

        let name = feature.name().unwrap_or("Unknown");
        debug!(lat, lon, name, "boundary matched");

        let mut mla = directory::resolve(name, &self.store.boundary_records);
        mla.constituency = name.to_string();
        if mla.constituency_number.is_none() {
            mla.constituency_number = feature.code();
        }

        let mp = match self.regions.map_to_region(name) {
            Some(region) => {
                let mut record = directory::resolve(region, &self.store.region_records);
                record.constituency = region.to_string();
                record
            }
            None => {
                // A gap in the static table is a data-completeness issue,
                // surfaced the same way as a missing record.
                warn!(name, "boundary has no region mapping");
                RepRecord::placeholder(&directory::normalize_name(name))
            }
        };

        LookupResult {
            mla: Some(mla),
            mp: Some(mp),
        }
    }

    /// Names of all loaded boundaries, sorted for stable output.
    pub fn list_known_boundaries(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .store
            .boundaries
            .iter()
            .map(|f| f.name().unwrap_or("Unknown").to_string())
            .collect();
        names.sort();
        names
    }

    /// Region names with records loaded, sorted.
    pub fn list_known_regions(&self) -> Vec<String> {
        let mut names: Vec<String> = self.store.region_records.keys().cloned().collect();
        names.sort();
        names
    }

    /// Case-insensitive boundary lookup by name.
    pub fn boundary_feature(&self, name: &str) -> Option<&BoundaryFeature> {
        self.store
            .boundaries
            .iter()
            .find(|f| f.name().is_some_and(|n| n.eq_ignore_ascii_case(name)))
    }

    pub fn boundary_geometry(&self, name: &str) -> Option<&Geometry> {
        self.boundary_feature(name).map(|f| &f.geometry)
    }

    pub fn boundary_count(&self) -> usize {
        self.store.boundaries.len()
    }

    pub fn region_record_count(&self) -> usize {
        self.store.region_records.len()
    }

    /// Resident cache entries, for health reporting.
    pub fn cached_queries(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NOT_AVAILABLE;
    use serde_json::json;
    use std::collections::HashMap;

    fn shivajinagar_feature() -> BoundaryFeature {
        serde_json::from_value(json!({
            "type": "Feature",
            "properties": {"AC_NAME": "Shivajinagar", "AC_NO": 157, "DIST_NAME": "BANGALORE"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[
                    [77.50, 12.90],
                    [77.70, 12.90],
                    [77.70, 13.05],
                    [77.50, 13.05],
                    [77.50, 12.90],
                ]],
            },
        }))
        .unwrap()
    }

    fn mla_record() -> RepRecord {
        serde_json::from_value(json!({
            "name": "Rizwan Arshad",
            "party": "INC",
            "constituency": "Shivajinagar",
            "constituency_number": "157",
            "contact": "+91-80-22866530",
            "email": "rizwanarshad.mla@karnataka.gov.in",
        }))
        .unwrap()
    }

    fn mp_record() -> RepRecord {
        serde_json::from_value(json!({
            "name": "PC Mohan",
            "party": "BJP",
            "constituency": "Bangalore Central",
            "constituency_number": "25",
            "office_address": "335-C, Parliament House Annexe, New Delhi - 110001",
        }))
        .unwrap()
    }

    fn service() -> LookupService {
        let store = DataStore {
            boundaries: vec![shivajinagar_feature()],
            boundary_records: HashMap::from([("Shivajinagar".to_string(), mla_record())]),
            region_records: HashMap::from([("Bangalore Central".to_string(), mp_record())]),
        };
        LookupService::new(
            Arc::new(store),
            RegionTable::bangalore(),
            Duration::from_secs(300),
        )
    }

    #[test]
    fn test_resolve_point_inside_boundary() {
        let service = service();
        // MG Road
        let result = service.resolve_point(12.9716, 77.5946);

        let mla = result.mla.expect("boundary match");
        assert_eq!(mla.name, "Rizwan Arshad");
        assert_eq!(mla.constituency, "Shivajinagar");

        let mp = result.mp.expect("region match");
        assert_eq!(mp.name, "PC Mohan");
        assert_eq!(mp.constituency, "Bangalore Central");
    }

    #[test]
    fn test_resolve_point_outside_all_boundaries() {
        let service = service();
        let result = service.resolve_point(12.80, 77.60);
        assert!(result.mla.is_none());
        assert!(result.mp.is_none());
    }

    #[test]
    fn test_unmapped_boundary_gets_placeholder_region() {
        let feature: BoundaryFeature = serde_json::from_value(json!({
            "type": "Feature",
            "properties": {"AC_NAME": "Uncharted (SC)"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]]],
            },
        }))
        .unwrap();
        let store = DataStore {
            boundaries: vec![feature],
            boundary_records: HashMap::new(),
            region_records: HashMap::new(),
        };
        let service = LookupService::new(
            Arc::new(store),
            RegionTable::bangalore(),
            Duration::from_secs(300),
        );

        let result = service.resolve_point(2.0, 2.0);
        let mla = result.mla.expect("boundary match");
        assert_eq!(mla.name, NOT_AVAILABLE);
        assert_eq!(mla.constituency, "Uncharted (SC)");

        let mp = result.mp.expect("placeholder region record");
        assert_eq!(mp.name, NOT_AVAILABLE);
        assert_eq!(mp.constituency, "Uncharted");
    }

    #[test]
    fn test_missing_record_number_filled_from_feature() {
        let store = DataStore {
            boundaries: vec![shivajinagar_feature()],
            boundary_records: HashMap::new(),
            region_records: HashMap::new(),
        };
        let service = LookupService::new(
            Arc::new(store),
            RegionTable::bangalore(),
            Duration::from_secs(300),
        );

        let result = service.resolve_point(12.9716, 77.5946);
        let mla = result.mla.expect("boundary match");
        assert_eq!(mla.constituency_number.as_deref(), Some("157"));
    }

    #[test]
    fn test_repeat_query_hits_cache() {
        let service = service();
        service.resolve_point(12.9716, 77.5946);
        service.resolve_point(12.971600, 77.594600);
        assert_eq!(service.cached_queries(), 1);
    }

    #[test]
    fn test_list_known_boundaries_sorted() {
        let service = service();
        assert_eq!(service.list_known_boundaries(), vec!["Shivajinagar"]);
        assert_eq!(service.list_known_regions(), vec!["Bangalore Central"]);
    }

    #[test]
    fn test_boundary_feature_case_insensitive() {
        let service = service();
        assert!(service.boundary_feature("shivajinagar").is_some());
        assert!(service.boundary_feature("SHIVAJINAGAR").is_some());
        assert!(service.boundary_feature("Hebbal").is_none());
        assert_eq!(
            service.boundary_geometry("Shivajinagar").map(|g| g.kind()),
            Some("Polygon")
        );
    }
}
