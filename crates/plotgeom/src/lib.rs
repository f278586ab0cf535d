//! Geometry for GPS-captured farm boundaries: ring area, unit conversion,
//! coordinate-shape normalization and envelope validation.
//!
//! All functions are pure. Rings are open (the closing edge is implicit) and
//! use [`LonLat`] in decimal degrees.
pub mod area;
pub mod bounds;
pub mod geojson;
pub mod metrics;
pub mod point;
pub mod units;
pub mod validate;

pub use area::{area_with, geodesic_area, polygon_area, signed_polygon_area, AreaMethod, EARTH_RADIUS_M};
pub use bounds::Bounds;
pub use geojson::to_geojson;
pub use metrics::{haversine_distance, polygon_centroid, polygon_perimeter};
pub use point::{normalize_point, normalize_ring, LonLat, Normalized, RawPoint};
pub use units::{format_area, to_hectares, to_square_meters, SQ_METERS_PER_HECTARE};
pub use validate::{validate_boundary, validate_boundary_with, BoundaryError, BoundaryReport, ValidationLimits, MIN_POINTS};
