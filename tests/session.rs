// Integration tests for the boundary capture workflow: retry after a failed
// finish, tail-only undo, and terminal states.

use farmreg::{
    geometry::{BoundaryError, Bounds},
    BoundaryPoint, BoundarySession, PositionSample, SessionError, SessionState,
};

fn fix(lat: f64, lon: f64, t: i64) -> BoundaryPoint { BoundaryPoint::new(lat, lon, t, 4.0) }

/// Roughly 2.4 ha triangle in Lagos.
fn triangle() -> [BoundaryPoint; 3] {
    [fix(6.600, 3.350, 1_000), fix(6.600, 3.352, 2_000), fix(6.602, 3.351, 3_000)]
}

#[test]
fn too_few_points_then_retry_succeeds() {
    let [p1, p2, p3] = triangle();
    let mut session = BoundarySession::new();
    session.start().unwrap();
    session.add_point(p1).unwrap();
    session.add_point(p2).unwrap();

    let err = session.finish().unwrap_err();
    assert_eq!(err, SessionError::Boundary(BoundaryError::TooFewPoints { count: 2 }));
    assert_eq!(session.state(), SessionState::Capturing);
    assert_eq!(session.len(), 2);

    session.add_point(p3).unwrap();
    let polygon = session.finish().unwrap();
    assert_eq!(session.state(), SessionState::Finished);
    assert!(polygon.area_hectares() > 0.01 && polygon.area_hectares() < 10_000.0);
    assert_eq!(polygon.points(), &[p1, p2, p3]);
    assert_eq!(polygon.captured_between(), (1_000, 3_000));
}

#[test]
fn remove_last_on_empty_is_noop() {
    let mut session = BoundarySession::new();
    session.start().unwrap();
    assert_eq!(session.remove_last(), Ok(None));
    assert_eq!(session.state(), SessionState::Capturing);
    assert!(session.is_empty());
}

#[test]
fn undo_only_from_the_tail() {
    let [p1, p2, p3] = triangle();
    let mut session = BoundarySession::new();
    session.start().unwrap();
    for p in [p1, p2, p3] { session.add_point(p).unwrap(); }

    assert_eq!(session.remove_last(), Ok(Some(p3)));
    assert_eq!(session.points(), &[p1, p2]);
    assert_eq!(session.current_estimate(), None);
}

#[test]
fn out_of_bounds_fix_blocks_finish_but_not_capture() {
    let [p1, p2, p3] = triangle();
    let mut session = BoundarySession::new();
    session.start().unwrap();
    session.add_point(p1).unwrap();
    session.add_point(fix(51.5, -0.12, 1_500)).unwrap();
    session.add_point(p2).unwrap();
    session.add_point(p3).unwrap();

    match session.finish() {
        Err(SessionError::Boundary(BoundaryError::OutOfBounds { index, .. })) => assert_eq!(index, 1),
        other => panic!("expected OutOfBounds, got {other:?}"),
    }
    assert_eq!(session.state(), SessionState::Capturing);
    assert_eq!(session.len(), 4);
}

#[test]
fn estimate_tracks_point_changes() {
    let [p1, p2, p3] = triangle();
    let mut session = BoundarySession::new();
    session.start().unwrap();
    for p in [p1, p2, p3] { session.add_point(p).unwrap(); }
    let three = session.current_estimate().unwrap();

    session.add_point(fix(6.602, 3.349, 4_000)).unwrap();
    let four = session.current_estimate().unwrap();
    assert!(four > three);
    assert!(session.perimeter_m() > 0.0);
}

#[test]
fn terminal_states_reject_further_calls() {
    let mut session = BoundarySession::new();
    session.start().unwrap();
    for p in triangle() { session.add_point(p).unwrap(); }
    session.finish().unwrap();

    assert!(matches!(session.add_point(triangle()[0]), Err(SessionError::InvalidState { .. })));
    assert!(matches!(session.remove_last(), Err(SessionError::InvalidState { .. })));
    assert!(matches!(session.finish(), Err(SessionError::InvalidState { .. })));
    assert!(matches!(session.start(), Err(SessionError::InvalidState { .. })));
    session.cancel();
    assert_eq!(session.state(), SessionState::Finished);
}

#[test]
fn samples_from_position_stream() {
    let mut session = BoundarySession::new();
    session.start().unwrap();
    let stream = [
        PositionSample { latitude: 9.060, longitude: 7.490, accuracy: 3.0, timestamp: 10 },
        PositionSample { latitude: 9.060, longitude: 7.493, accuracy: 3.5, timestamp: 11 },
        PositionSample { latitude: 9.063, longitude: 7.493, accuracy: 2.0, timestamp: 12 },
    ];
    for sample in stream { session.add_sample(sample).unwrap(); }

    let polygon = session.finish().unwrap();
    assert_eq!(polygon.points()[1].accuracy_m, 3.5);
    let c = polygon.centroid().unwrap();
    assert!(Bounds::NIGERIA.contains(c));
    assert_eq!(polygon.to_geojson()["coordinates"][0].as_array().unwrap().len(), 4);
}
