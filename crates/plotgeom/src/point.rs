use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical geographic position in decimal degrees (WGS84).
///
/// Every other function in this crate operates on `LonLat`; stored records in
/// older shapes are converted once, at ingestion, by [`normalize_point`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    #[inline] pub fn new(lon: f64, lat: f64) -> Self { Self { lon, lat } }

    /// Both components are finite numbers.
    #[inline] pub fn is_finite(&self) -> bool { self.lon.is_finite() && self.lat.is_finite() }
}

impl From<LonLat> for geo::Coord<f64> {
    fn from(p: LonLat) -> Self { geo::Coord { x: p.lon, y: p.lat } }
}

impl From<geo::Coord<f64>> for LonLat {
    fn from(c: geo::Coord<f64>) -> Self { Self { lon: c.x, lat: c.y } }
}

/// The point shapes found in stored farm records.
///
/// Variant order matters: serde tries them top to bottom.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPoint {
    /// `[lon, lat]`, GeoJSON coordinate order.
    Pair([f64; 2]),
    /// `{"type": "Point", "coordinates": [lon, lat]}`
    GeoJson {
        #[serde(rename = "type")]
        kind: String,
        coordinates: [f64; 2],
    },
    /// `{"latitude": .., "longitude": ..}` as delivered by device location services.
    Long { latitude: f64, longitude: f64 },
    /// `{"lat": .., "lng": ..}` as used by web map widgets.
    Short { lat: f64, lng: f64 },
    /// Already canonical `{"lon": .., "lat": ..}`.
    Canonical { lon: f64, lat: f64 },
}

impl RawPoint {
    /// Convert to the canonical shape, or `None` for a GeoJSON object that is not a Point.
    pub fn to_lon_lat(&self) -> Option<LonLat> {
        match *self {
            RawPoint::Pair([lon, lat]) => Some(LonLat::new(lon, lat)),
            RawPoint::GeoJson { ref kind, coordinates: [lon, lat] } => {
                (kind == "Point").then(|| LonLat::new(lon, lat))
            }
            RawPoint::Long { latitude, longitude } => Some(LonLat::new(longitude, latitude)),
            RawPoint::Short { lat, lng } => Some(LonLat::new(lng, lat)),
            RawPoint::Canonical { lon, lat } => Some(LonLat::new(lon, lat)),
        }
    }
}

/// Result of [`normalize_point`]: either the canonical point, or the input untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Point(LonLat),
    Unknown(Value),
}

impl Normalized {
    pub fn point(&self) -> Option<LonLat> {
        match self {
            Normalized::Point(p) => Some(*p),
            Normalized::Unknown(_) => None,
        }
    }
}

/// Adapt any recognized point shape to `LonLat`.
/// Unrecognized shapes pass through unchanged; validation belongs upstream.
pub fn normalize_point(value: &Value) -> Normalized {
    RawPoint::deserialize(value).ok()
        .and_then(|raw| raw.to_lon_lat())
        .map(Normalized::Point)
        .unwrap_or_else(|| Normalized::Unknown(value.clone()))
}

/// Normalize a JSON array of points, dropping anything that is not a recognized shape.
/// Returns the canonical ring and the indices of the dropped entries.
pub fn normalize_ring(values: &[Value]) -> (Vec<LonLat>, Vec<usize>) {
    let mut ring = Vec::with_capacity(values.len());
    let mut skipped = Vec::new();
    for (i, value) in values.iter().enumerate() {
        match normalize_point(value) {
            Normalized::Point(p) => ring.push(p),
            Normalized::Unknown(_) => skipped.push(i),
        }
    }
    (ring, skipped)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn pair_is_lon_first() {
        assert_eq!(normalize_point(&json!([3.35, 6.6])).point(), Some(LonLat::new(3.35, 6.6)));
    }

    #[test]
    fn long_and_short_names() {
        let a = normalize_point(&json!({"latitude": 6.6, "longitude": 3.35, "accuracy": 4.0}));
        let b = normalize_point(&json!({"lat": 6.6, "lng": 3.35}));
        assert_eq!(a, b);
        assert_eq!(a.point(), Some(LonLat::new(3.35, 6.6)));
    }

    #[test]
    fn geojson_point() {
        let p = normalize_point(&json!({"type": "Point", "coordinates": [7.49, 9.06]}));
        assert_eq!(p.point(), Some(LonLat::new(7.49, 9.06)));
    }

    #[test]
    fn geojson_non_point_passes_through() {
        let v = json!({"type": "LineString", "coordinates": [1.0, 2.0]});
        assert_eq!(normalize_point(&v), Normalized::Unknown(v.clone()));
    }

    #[test]
    fn canonical_is_idempotent() {
        let p = LonLat::new(3.35, 6.6);
        let v = serde_json::to_value(p).unwrap();
        assert_eq!(normalize_point(&v).point(), Some(p));
    }

    #[test]
    fn unknown_passes_through() {
        let v = json!({"x": 1, "y": 2});
        assert_eq!(normalize_point(&v), Normalized::Unknown(v.clone()));
        let s = json!("6.6,3.35");
        assert_eq!(normalize_point(&s), Normalized::Unknown(s.clone()));
    }

    #[test]
    fn ring_reports_skipped_indices() {
        let (ring, skipped) = normalize_ring(&[json!([3.0, 6.0]), json!(null), json!({"lat": 6.1, "lng": 3.1})]);
        assert_eq!(ring.len(), 2);
        assert_eq!(skipped, vec![1]);
    }
}
