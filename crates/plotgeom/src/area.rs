use geo::{GeodesicArea, LineString, Polygon};
use serde::{Deserialize, Serialize};

use crate::point::LonLat;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Area formula used for a ring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaMethod {
    /// Closed-form spherical excess approximation. Accurate for farm-plot
    /// scale (up to a few hundred hectares), cheap enough to poll live.
    #[default]
    SphericalExcess,
    /// Ellipsoidal (WGS84) geodesic area; exact but more expensive.
    Geodesic,
}

/// Signed area of a ring in square metres, spherical excess approximation.
///
/// The ring is implicitly closed (last point connects back to the first).
/// The sign encodes winding order and flips when the ring is reversed.
/// Rings with fewer than 3 points have zero area.
pub fn signed_polygon_area(ring: &[LonLat]) -> f64 {
    if ring.len() < 3 { return 0.0 }

    let n = ring.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        sum += (b.lon - a.lon).to_radians()
            * (2.0 + a.lat.to_radians().sin() + b.lat.to_radians().sin());
    }

    sum * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0
}

/// Unsigned area of a ring in square metres. Zero for fewer than 3 points.
#[inline]
pub fn polygon_area(ring: &[LonLat]) -> f64 { signed_polygon_area(ring).abs() }

/// Ellipsoidal area of a ring in square metres. Zero for fewer than 3 points.
pub fn geodesic_area(ring: &[LonLat]) -> f64 {
    if ring.len() < 3 { return 0.0 }
    to_geo_polygon(ring).geodesic_area_unsigned()
}

/// Area of a ring in square metres using the chosen method.
pub fn area_with(method: AreaMethod, ring: &[LonLat]) -> f64 {
    match method {
        AreaMethod::SphericalExcess => polygon_area(ring),
        AreaMethod::Geodesic => geodesic_area(ring),
    }
}

/// Build a closed `geo::Polygon` (no holes) from an open ring.
pub fn to_geo_polygon(ring: &[LonLat]) -> Polygon<f64> {
    let mut coords: Vec<geo::Coord<f64>> = ring.iter().map(|&p| p.into()).collect();
    if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
        if first != last { coords.push(first) }
    }
    Polygon::new(LineString(coords), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(lon: f64, lat: f64, side: f64) -> Vec<LonLat> {
        vec![
            LonLat::new(lon, lat),
            LonLat::new(lon + side, lat),
            LonLat::new(lon + side, lat + side),
            LonLat::new(lon, lat + side),
        ]
    }

    #[test]
    fn degenerate_rings_are_zero() {
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(polygon_area(&[LonLat::new(3.0, 6.0), LonLat::new(3.1, 6.0)]), 0.0);
        assert_eq!(geodesic_area(&[LonLat::new(3.0, 6.0)]), 0.0);
    }

    #[test]
    fn equator_square_matches_flat_estimate() {
        let expected = (111_320.0 * 0.001_f64).powi(2);
        let area = polygon_area(&square(0.0, 0.0, 0.001));
        assert!((area - expected).abs() / expected < 0.05, "area = {area}");
    }

    #[test]
    fn reversal_flips_sign_only() {
        let ring = square(3.3, 6.5, 0.01);
        let mut rev = ring.clone();
        rev.reverse();
        let a = signed_polygon_area(&ring);
        let b = signed_polygon_area(&rev);
        assert!(a != 0.0);
        assert!((a + b).abs() < 1e-6 * a.abs());
    }

    #[test]
    fn methods_agree_at_plot_scale() {
        let ring = square(7.4, 9.0, 0.01);
        let approx = area_with(AreaMethod::SphericalExcess, &ring);
        let exact = area_with(AreaMethod::Geodesic, &ring);
        assert!((approx - exact).abs() / exact < 0.01, "approx={approx} exact={exact}");
    }

    #[test]
    fn geo_polygon_is_closed() {
        let poly = to_geo_polygon(&square(0.0, 0.0, 1.0));
        assert_eq!(poly.exterior().0.len(), 5);
        assert_eq!(poly.exterior().0.first(), poly.exterior().0.last());
    }
}
