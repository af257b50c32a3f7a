//! Banyan - coordinate-to-representative lookup.
//!
//! Resolves a geographic coordinate to the assembly constituency polygon
//! containing it, then maps that constituency to its parliamentary
//! constituency and returns the representative records for both.

pub mod cache;
pub mod directory;
pub mod loader;
pub mod models;
pub mod pip;
pub mod regions;
pub mod service;

pub use loader::DataStore;
pub use models::{BoundaryFeature, Geometry, Point, RepRecord};
pub use regions::RegionTable;
pub use service::{LookupResult, LookupService};
