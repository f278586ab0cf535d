use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    area::{area_with, AreaMethod},
    bounds::Bounds,
    point::LonLat,
    units::{format_area, to_hectares},
};

/// Minimum number of points for a closed boundary.
pub const MIN_POINTS: usize = 3;

/// Area limits a captured boundary must respect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Smaller areas are treated as a single-spot capture.
    pub min_area_m2: f64,
    /// Larger areas are treated as a GPS glitch.
    pub max_area_ha: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self { Self { min_area_m2: 100.0, max_area_ha: 10_000.0 } }
}

/// Why a boundary was rejected. Messages are shown to the field user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundaryError {
    #[error("add at least 3 points (have {count})")]
    TooFewPoints { count: usize },

    #[error("point {index} ({lat:.6}, {lon:.6}) is outside the supported area")]
    OutOfBounds { index: usize, lat: f64, lon: f64 },

    #[error("area too small ({area_m2:.0} m²), check your boundary points")]
    AreaTooSmall { area_m2: f64 },

    #[error("area too large ({area_ha:.2} ha), check for GPS glitches")]
    AreaTooLarge { area_ha: f64 },
}

/// Accepted boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryReport {
    pub area_m2: f64,
    pub area_hectares: f64,
    pub display: String,
}

/// Validate a ring against the Nigeria envelope and default limits.
pub fn validate_boundary(ring: &[LonLat]) -> Result<BoundaryReport, BoundaryError> {
    validate_boundary_with(ring, &Bounds::NIGERIA, &ValidationLimits::default(), AreaMethod::default())
}

/// Validate a ring. Checks run in order: point count, envelope, area.
/// Never panics; NaN coordinates are reported as out of bounds.
pub fn validate_boundary_with(
    ring: &[LonLat],
    bounds: &Bounds,
    limits: &ValidationLimits,
    method: AreaMethod,
) -> Result<BoundaryReport, BoundaryError> {
    if ring.len() < MIN_POINTS {
        return Err(BoundaryError::TooFewPoints { count: ring.len() });
    }

    if let Some((index, p)) = ring.iter().enumerate().find(|(_, p)| !bounds.contains(**p)) {
        return Err(BoundaryError::OutOfBounds { index, lat: p.lat, lon: p.lon });
    }

    let area_m2 = area_with(method, ring);
    if area_m2 < limits.min_area_m2 {
        return Err(BoundaryError::AreaTooSmall { area_m2 });
    }

    let area_hectares = to_hectares(area_m2);
    if area_hectares > limits.max_area_ha {
        return Err(BoundaryError::AreaTooLarge { area_ha: area_hectares });
    }

    Ok(BoundaryReport { area_m2, area_hectares, display: format_area(area_hectares) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_actionable() {
        assert_eq!(BoundaryError::TooFewPoints { count: 2 }.to_string(), "add at least 3 points (have 2)");
        let e = BoundaryError::OutOfBounds { index: 4, lat: 20.0, lon: 3.0 };
        assert!(e.to_string().starts_with("point 4 (20.000000, 3.000000)"));
    }

    #[test]
    fn custom_bounds() {
        let ring = [LonLat::new(0.0, 0.0), LonLat::new(0.01, 0.0), LonLat::new(0.01, 0.01)];
        assert!(matches!(validate_boundary(&ring), Err(BoundaryError::OutOfBounds { index: 0, .. })));

        let everywhere = Bounds::new(-90.0, 90.0, -180.0, 180.0);
        let report = validate_boundary_with(&ring, &everywhere, &ValidationLimits::default(), AreaMethod::Geodesic);
        assert!(report.is_ok());
    }
}
