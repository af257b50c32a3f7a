//! Core data models for the lookup service.

pub mod feature;
pub mod geometry;
pub mod record;

pub use feature::BoundaryFeature;
pub use geometry::{Geometry, GeometryError, Point, Ring};
pub use record::{RepRecord, NOT_AVAILABLE};
