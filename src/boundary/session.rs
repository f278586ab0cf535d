use plotgeom::{
    area_with, polygon_perimeter, to_hectares, validate_boundary_with, AreaMethod, BoundaryError, Bounds,
    ValidationLimits, MIN_POINTS,
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use super::{
    point::{ring, BoundaryPoint, PositionSample},
    polygon::FarmPolygon,
};

/// Capture lifecycle. `Finished` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    Capturing,
    Finished,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// The call is not valid in the current state (a caller bug).
    #[error("cannot {action} while session is {state:?}")]
    InvalidState { action: &'static str, state: SessionState },

    #[error("GPS fix has a non-numeric coordinate")]
    NonFinite,

    /// The boundary is not acceptable yet; the session keeps capturing.
    #[error(transparent)]
    Boundary(#[from] BoundaryError),
}

/// Interactive capture of one farm boundary from a live position stream.
///
/// Points are kept in arrival order; only [`remove_last`](Self::remove_last)
/// takes one away. The session does not throttle: callers push roughly one
/// fix per second.
#[derive(Debug, Clone)]
pub struct BoundarySession {
    state: SessionState,
    points: Vec<BoundaryPoint>,
    bounds: Bounds,
    limits: ValidationLimits,
    method: AreaMethod,
}

impl Default for BoundarySession {
    fn default() -> Self {
        Self::with_limits(Bounds::NIGERIA, ValidationLimits::default(), AreaMethod::default())
    }
}

impl BoundarySession {
    pub fn new() -> Self { Self::default() }

    pub fn with_limits(bounds: Bounds, limits: ValidationLimits, method: AreaMethod) -> Self {
        Self { state: SessionState::Idle, points: Vec::new(), bounds, limits, method }
    }

    /// Session using the envelope, limits and area method from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_limits(config.bounds, config.limits, config.area_method)
    }

    #[inline] pub fn state(&self) -> SessionState { self.state }

    #[inline] pub fn points(&self) -> &[BoundaryPoint] { &self.points }

    #[inline] pub fn len(&self) -> usize { self.points.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.points.is_empty() }

    fn require(&self, action: &'static str, state: SessionState) -> Result<(), SessionError> {
        if self.state == state { Ok(()) } else { Err(SessionError::InvalidState { action, state: self.state }) }
    }

    fn transition(&mut self, to: SessionState) {
        debug!(from = ?self.state, ?to, points = self.points.len(), "boundary session");
        self.state = to;
    }

    /// `Idle -> Capturing`.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.require("start", SessionState::Idle)?;
        self.points.clear();
        self.transition(SessionState::Capturing);
        Ok(())
    }

    /// Append a fix. Envelope checks wait until [`finish`](Self::finish) so
    /// that one jittery fix does not abort the capture.
    pub fn add_point(&mut self, point: BoundaryPoint) -> Result<(), SessionError> {
        self.require("add a point", SessionState::Capturing)?;
        if !point.is_finite() {
            return Err(SessionError::NonFinite);
        }
        self.points.push(point);
        Ok(())
    }

    /// Append a fix straight from the position stream.
    pub fn add_sample(&mut self, sample: PositionSample) -> Result<(), SessionError> {
        self.add_point(sample.into())
    }

    /// Undo the most recent fix. Empty list is a no-op.
    pub fn remove_last(&mut self) -> Result<Option<BoundaryPoint>, SessionError> {
        self.require("remove a point", SessionState::Capturing)?;
        Ok(self.points.pop())
    }

    /// Running area estimate in hectares, `None` below three points.
    pub fn current_estimate(&self) -> Option<f64> {
        if self.points.len() < MIN_POINTS { return None }
        Some(to_hectares(area_with(self.method, &ring(&self.points))))
    }

    /// Running perimeter in metres around the closed ring.
    pub fn perimeter_m(&self) -> f64 { polygon_perimeter(&ring(&self.points)) }

    /// Validate and freeze the boundary: `Capturing -> Finished`.
    /// On a validation failure the session stays `Capturing` with its points intact.
    pub fn finish(&mut self) -> Result<FarmPolygon, SessionError> {
        self.require("finish", SessionState::Capturing)?;
        let report = validate_boundary_with(&ring(&self.points), &self.bounds, &self.limits, self.method)
            .inspect_err(|e| debug!(reason = %e, points = self.points.len(), "boundary not accepted"))?;

        let polygon = FarmPolygon::new(std::mem::take(&mut self.points), report.area_hectares);
        self.transition(SessionState::Finished);
        Ok(polygon)
    }

    /// `Capturing -> Cancelled`, discarding points. No-op in any other state.
    pub fn cancel(&mut self) {
        if self.state == SessionState::Capturing {
            self.points.clear();
            self.transition(SessionState::Cancelled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lon: f64) -> BoundaryPoint { BoundaryPoint::new(lat, lon, 0, 5.0) }

    #[test]
    fn starts_idle() {
        let s = BoundarySession::new();
        assert_eq!(s.state(), SessionState::Idle);
        assert!(s.is_empty());
    }

    #[test]
    fn add_before_start_is_rejected() {
        let mut s = BoundarySession::new();
        let err = s.add_point(p(6.6, 3.35)).unwrap_err();
        assert_eq!(err, SessionError::InvalidState { action: "add a point", state: SessionState::Idle });
    }

    #[test]
    fn nan_fix_is_rejected_and_capture_continues() {
        let mut s = BoundarySession::new();
        s.start().unwrap();
        assert_eq!(s.add_point(p(f64::NAN, 3.35)), Err(SessionError::NonFinite));
        assert_eq!(s.state(), SessionState::Capturing);
        assert!(s.is_empty());
    }

    #[test]
    fn jitter_outside_bounds_is_accepted_while_capturing() {
        let mut s = BoundarySession::new();
        s.start().unwrap();
        s.add_point(p(40.0, 3.35)).unwrap();
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn estimate_needs_three_points() {
        let mut s = BoundarySession::new();
        s.start().unwrap();
        s.add_point(p(6.600, 3.350)).unwrap();
        s.add_point(p(6.600, 3.352)).unwrap();
        assert_eq!(s.current_estimate(), None);
        s.add_point(p(6.602, 3.351)).unwrap();
        let ha = s.current_estimate().unwrap();
        assert!(ha > 1.0 && ha < 5.0, "ha = {ha}");
    }

    #[test]
    fn cannot_restart_terminal_session() {
        let mut s = BoundarySession::new();
        s.start().unwrap();
        s.cancel();
        assert_eq!(s.state(), SessionState::Cancelled);
        assert!(matches!(s.start(), Err(SessionError::InvalidState { .. })));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut s = BoundarySession::new();
        s.cancel();
        assert_eq!(s.state(), SessionState::Idle);
        s.start().unwrap();
        s.add_point(p(6.6, 3.35)).unwrap();
        s.cancel();
        s.cancel();
        assert_eq!(s.state(), SessionState::Cancelled);
        assert!(s.is_empty());
    }

    #[test]
    fn custom_envelope_from_config() {
        let config = Config { bounds: Bounds::new(-1.0, 1.0, -1.0, 1.0), ..Default::default() };
        let mut s = BoundarySession::from_config(&config);
        s.start().unwrap();
        for (lat, lon) in [(0.0, 0.0), (0.0, 0.002), (0.002, 0.001)] {
            s.add_point(p(lat, lon)).unwrap();
        }
        assert!(s.finish().is_ok());
    }
}
