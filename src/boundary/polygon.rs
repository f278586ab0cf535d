use std::sync::Arc;

use plotgeom::{polygon_centroid, polygon_perimeter, to_geojson, LonLat, MIN_POINTS};
use serde::Serialize;

use super::point::{ring, BoundaryPoint};

/// A finished, validated farm boundary. Immutable.
///
/// The ring is stored open: the last point connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmPolygon {
    points: Arc<[BoundaryPoint]>,
    area_hectares: f64,
}

impl FarmPolygon {
    /// Only the session constructs polygons, after validation.
    pub(crate) fn new(points: Vec<BoundaryPoint>, area_hectares: f64) -> Self {
        debug_assert!(points.len() >= MIN_POINTS);
        Self { points: points.into(), area_hectares }
    }

    pub fn points(&self) -> &[BoundaryPoint] { &self.points }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn area_hectares(&self) -> f64 { self.area_hectares }

    pub fn perimeter_m(&self) -> f64 { polygon_perimeter(&ring(&self.points)) }

    pub fn centroid(&self) -> Option<LonLat> { polygon_centroid(&ring(&self.points)) }

    /// Closed GeoJSON Polygon geometry.
    pub fn to_geojson(&self) -> serde_json::Value { to_geojson(&ring(&self.points)) }

    /// Timestamps of the first and last fix.
    pub fn captured_between(&self) -> (i64, i64) {
        let first = self.points.first().map_or(0, |p| p.timestamp_ms);
        let last = self.points.last().map_or(0, |p| p.timestamp_ms);
        (first, last)
    }
}
