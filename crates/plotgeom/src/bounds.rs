use geo::{Coord, Rect};
use serde::{Deserialize, Serialize};

use crate::point::LonLat;

/// Inclusive latitude/longitude envelope that captured points must fall within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// Operating envelope for Nigeria.
    pub const NIGERIA: Bounds = Bounds { min_lat: 4.0, max_lat: 14.0, min_lon: 2.5, max_lon: 15.0 };

    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self { min_lat, max_lat, min_lon, max_lon }
    }

    /// Check a point against the envelope, edges included. NaN is never contained.
    #[inline]
    pub fn contains(&self, p: LonLat) -> bool {
        (self.min_lat..=self.max_lat).contains(&p.lat) && (self.min_lon..=self.max_lon).contains(&p.lon)
    }

    /// The envelope as a `geo::Rect` (x = lon, y = lat).
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            Coord { x: self.min_lon, y: self.min_lat },
            Coord { x: self.max_lon, y: self.max_lat },
        )
    }
}

impl Default for Bounds {
    fn default() -> Self { Self::NIGERIA }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nigeria_edges_inclusive() {
        let b = Bounds::NIGERIA;
        assert!(b.contains(LonLat::new(2.5, 4.0)));
        assert!(b.contains(LonLat::new(15.0, 14.0)));
        assert!(!b.contains(LonLat::new(2.49, 6.0)));
        assert!(!b.contains(LonLat::new(7.0, 14.01)));
    }

    #[test]
    fn nan_is_outside() {
        assert!(!Bounds::NIGERIA.contains(LonLat::new(f64::NAN, 6.0)));
    }

    #[test]
    fn rect_corners() {
        let r = Bounds::NIGERIA.to_rect();
        assert_eq!(r.min(), Coord { x: 2.5, y: 4.0 });
        assert_eq!(r.max(), Coord { x: 15.0, y: 14.0 });
    }
}
