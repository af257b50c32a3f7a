//! First-match boundary scan.

use tracing::warn;

use super::raycast::point_in_geometry;
use crate::models::{BoundaryFeature, Point};

/// Scan features in load order and return the first whose geometry contains
/// the point.
///
/// Dataset order is significant: this is deliberately first-match-wins, not
/// smallest-area-wins. A feature whose geometry cannot be tested is skipped
/// with a warning so one bad entry cannot take down the whole scan.
pub fn locate(point: Point, features: &[BoundaryFeature]) -> Option<&BoundaryFeature> {
    for feature in features {
        match point_in_geometry(point, &feature.geometry) {
            Ok(true) => return Some(feature),
            Ok(false) => {}
            Err(err) => {
                warn!(
                    feature = feature.name().unwrap_or("<unnamed>"),
                    "skipping feature with untestable geometry: {err}"
                );
            }
        }
    }
    None
}

/// Every feature containing the point, in load order.
pub fn locate_all<'a>(point: Point, features: &'a [BoundaryFeature]) -> Vec<&'a BoundaryFeature> {
    features
        .iter()
        .filter(|feature| point_in_geometry(point, &feature.geometry).unwrap_or(false))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn square_feature(name: &str, min: (f64, f64), max: (f64, f64)) -> BoundaryFeature {
        serde_json::from_value(json!({
            "type": "Feature",
            "properties": {"AC_NAME": name},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[
                    [min.0, min.1],
                    [max.0, min.1],
                    [max.0, max.1],
                    [min.0, max.1],
                    [min.0, min.1],
                ]],
            },
        }))
        .unwrap()
    }

    fn unsupported_feature(name: &str) -> BoundaryFeature {
        serde_json::from_value(json!({
            "type": "Feature",
            "properties": {"AC_NAME": name},
            "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]},
        }))
        .unwrap()
    }

    #[test]
    fn test_first_match_wins_over_overlap() {
        let features = vec![
            square_feature("first", (0.0, 0.0), (4.0, 4.0)),
            square_feature("second", (0.0, 0.0), (4.0, 4.0)),
        ];
        let hit = locate(Point::new(2.0, 2.0), &features).unwrap();
        assert_eq!(hit.name(), Some("first"));
    }

    #[test]
    fn test_untestable_feature_does_not_abort_scan() {
        let features = vec![
            unsupported_feature("broken"),
            square_feature("good", (0.0, 0.0), (4.0, 4.0)),
        ];
        let hit = locate(Point::new(2.0, 2.0), &features).unwrap();
        assert_eq!(hit.name(), Some("good"));
    }

    #[test]
    fn test_no_match_is_none() {
        let features = vec![square_feature("only", (0.0, 0.0), (4.0, 4.0))];
        assert!(locate(Point::new(10.0, 10.0), &features).is_none());
    }

    #[test]
    fn test_locate_all_preserves_order() {
        let features = vec![
            square_feature("a", (0.0, 0.0), (4.0, 4.0)),
            square_feature("b", (10.0, 10.0), (14.0, 14.0)),
            square_feature("c", (0.0, 0.0), (4.0, 4.0)),
        ];
        let hits = locate_all(Point::new(2.0, 2.0), &features);
        let names: Vec<_> = hits.iter().map(|f| f.name().unwrap()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }
}
