mod point;
mod polygon;
mod session;

pub use point::{BoundaryPoint, PositionSample};
pub use polygon::FarmPolygon;
pub use session::{BoundarySession, SessionError, SessionState};
