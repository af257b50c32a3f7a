//! GeoJSON polygon-family geometry types.

use serde::de::{self, Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single GeoJSON position: x is longitude, y is latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.x)?;
        seq.serialize_element(&self.y)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PositionVisitor;

        impl<'de> Visitor<'de> for PositionVisitor {
            type Value = Point;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a GeoJSON position: [lon, lat] with optional elevation")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Point, A::Error> {
                let x: f64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let y: f64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                // Some datasets carry an elevation as a third element
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Point { x, y })
            }
        }

        deserializer.deserialize_seq(PositionVisitor)
    }
}

/// A linear ring. Closed by GeoJSON convention (first position repeated at
/// the end), but consumers treat the sequence as cyclic so an unclosed ring
/// still behaves correctly.
pub type Ring = Vec<Point>;

/// Error for geometry a containment test cannot handle.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("unsupported geometry type: {0}")]
    UnsupportedType(String),
}

/// GeoJSON geometry restricted to the polygon family.
///
/// Geometry types outside the polygon family survive deserialization as
/// [`Geometry::Unsupported`] so callers can report them instead of silently
/// treating the feature as a non-match.
#[derive(Debug, Clone)]
pub enum Geometry {
    /// Ring 0 is the exterior, the rest are holes.
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
    Unsupported(String),
}

impl Geometry {
    pub fn kind(&self) -> &str {
        match self {
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::Unsupported(kind) => kind,
        }
    }
}

#[derive(Deserialize)]
struct GeometryRepr {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: serde_json::Value,
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GeometryRepr::deserialize(deserializer)?;
        match repr.kind.as_str() {
            "Polygon" => {
                let rings = serde_json::from_value(repr.coordinates).map_err(de::Error::custom)?;
                Ok(Geometry::Polygon(rings))
            }
            "MultiPolygon" => {
                let polygons =
                    serde_json::from_value(repr.coordinates).map_err(de::Error::custom)?;
                Ok(Geometry::MultiPolygon(polygons))
            }
            _ => Ok(Geometry::Unsupported(repr.kind)),
        }
    }
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Geometry::Polygon(rings) => {
                map.serialize_entry("type", "Polygon")?;
                map.serialize_entry("coordinates", rings)?;
            }
            Geometry::MultiPolygon(polygons) => {
                map.serialize_entry("type", "MultiPolygon")?;
                map.serialize_entry("coordinates", polygons)?;
            }
            Geometry::Unsupported(kind) => {
                map.serialize_entry("type", kind)?;
                map.serialize_entry("coordinates", &serde_json::Value::Null)?;
            }
        }
        map.end()
    }
}
