use geo::Centroid;

use crate::{
    area::{to_geo_polygon, EARTH_RADIUS_M},
    point::LonLat,
};

/// Great-circle distance in metres (haversine).
pub fn haversine_distance(a: LonLat, b: LonLat) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Length of the closed ring in metres, including the closing edge.
/// A single point has zero perimeter; two points count the edge twice.
pub fn polygon_perimeter(ring: &[LonLat]) -> f64 {
    if ring.len() < 2 { return 0.0 }
    let n = ring.len();
    (0..n).map(|i| haversine_distance(ring[i], ring[(i + 1) % n])).sum()
}

/// Planar centroid of the ring in degrees, or `None` for an empty ring.
/// Adequate as a map pin for plot-sized polygons.
pub fn polygon_centroid(ring: &[LonLat]) -> Option<LonLat> {
    match ring.len() {
        0 => None,
        1 | 2 => {
            let n = ring.len() as f64;
            let (lon, lat) = ring.iter().fold((0.0, 0.0), |(x, y), p| (x + p.lon, y + p.lat));
            Some(LonLat::new(lon / n, lat / n))
        }
        _ => to_geo_polygon(ring).centroid().map(|p| LonLat::new(p.x(), p.y())),
    }
}
