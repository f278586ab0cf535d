use plotgeom::LonLat;
use serde::{Deserialize, Serialize};

/// One GPS fix on a farm boundary, in the order the user walked it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp_ms: i64,     // Unix epoch milliseconds
    pub accuracy_m: f64,
}

impl BoundaryPoint {
    pub fn new(latitude: f64, longitude: f64, timestamp_ms: i64, accuracy_m: f64) -> Self {
        Self { latitude, longitude, timestamp_ms, accuracy_m }
    }

    /// Latitude and longitude are both finite.
    #[inline] pub fn is_finite(&self) -> bool { self.latitude.is_finite() && self.longitude.is_finite() }

    #[inline] pub fn lon_lat(&self) -> LonLat { LonLat::new(self.longitude, self.latitude) }
}

/// A sample from a device position stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f64,
    pub timestamp: i64,
}

impl From<PositionSample> for BoundaryPoint {
    fn from(s: PositionSample) -> Self {
        Self::new(s.latitude, s.longitude, s.timestamp, s.accuracy)
    }
}

pub(crate) fn ring(points: &[BoundaryPoint]) -> Vec<LonLat> {
    points.iter().map(BoundaryPoint::lon_lat).collect()
}
