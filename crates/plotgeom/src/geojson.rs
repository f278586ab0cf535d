use serde_json::{json, Value};

use crate::point::LonLat;

/// Encode an open ring as a closed GeoJSON Polygon geometry.
pub fn to_geojson(ring: &[LonLat]) -> Value {
    let mut coords: Vec<[f64; 2]> = ring.iter().map(|p| [p.lon, p.lat]).collect();
    if let Some(&first) = coords.first() {
        coords.push(first);
    }
    json!({ "type": "Polygon", "coordinates": [coords] })
}
