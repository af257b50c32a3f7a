//! Point-in-polygon (PIP) boundary matching.
//!
//! Ray-casting containment tests over GeoJSON polygon geometries and the
//! ordered first-match scan used to find which boundary a point falls in.

mod locator;
mod raycast;

pub use locator::{locate, locate_all};
pub use raycast::{point_in_geometry, point_in_ring};
