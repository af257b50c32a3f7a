//! Ray-casting point-in-polygon tests for GeoJSON geometries.
//!
//! Casts a horizontal ray eastward from the test point and counts boundary
//! crossings; an odd count means the point is inside.
//!
//! Reference:
//!     W. Randolph Franklin, "PNPOLY - Point Inclusion in Polygon Test"
//!     https://wrfranklin.org/Research/Short_Notes/pnpoly.html

use crate::models::{Geometry, GeometryError, Point, Ring};

/// Crossing-number test for a single linear ring.
///
/// Edge indices wrap around, so the ring works whether or not the first
/// position is repeated at the end. Rings with fewer than 3 positions
/// contain nothing. Points exactly on an edge classify either way; that is
/// inherent to the method.
pub fn point_in_ring(point: Point, ring: &[Point]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (xi, yi) = (ring[i].x, ring[i].y);
        let (xj, yj) = (ring[j].x, ring[j].y);

        // Horizontal edges (yi == yj) fail the straddle check, so the
        // division below never sees a zero denominator.
        if (yi > point.y) != (yj > point.y)
            && point.x < (xj - xi) * (point.y - yi) / (yj - yi) + xi
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// One polygon: inside the exterior ring and outside every hole.
fn point_in_rings(point: Point, rings: &[Ring]) -> bool {
    let Some(exterior) = rings.first() else {
        return false;
    };
    if !point_in_ring(point, exterior) {
        return false;
    }
    !rings[1..].iter().any(|hole| point_in_ring(point, hole))
}

/// Test a point against a Polygon or MultiPolygon geometry.
///
/// An unknown geometry type is a data-integrity problem, reported as an
/// error rather than a quiet non-match.
pub fn point_in_geometry(point: Point, geometry: &Geometry) -> Result<bool, GeometryError> {
    match geometry {
        Geometry::Polygon(rings) => Ok(point_in_rings(point, rings)),
        Geometry::MultiPolygon(polygons) => {
            Ok(polygons.iter().any(|rings| point_in_rings(point, rings)))
        }
        Geometry::Unsupported(kind) => Err(GeometryError::UnsupportedType(kind.clone())),
    }
}
