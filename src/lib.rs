#![doc = "Location hierarchy resolution and farm boundary capture for field registration"]
mod boundary;
mod config;
mod dataset;
mod hierarchy;
mod record;
mod resolver;

#[doc(inline)]
pub use boundary::{BoundaryPoint, BoundarySession, FarmPolygon, PositionSample, SessionError, SessionState};

#[doc(inline)]
pub use config::Config;

#[doc(inline)]
pub use dataset::Dataset;

#[doc(inline)]
pub use hierarchy::{format_name, normalize_id, slugify, AdminLevel, AdminUnit, LocationPath, Origin};

#[doc(inline)]
pub use record::FarmRecord;

#[doc(inline)]
pub use resolver::{
    BundledStrategy, CacheStats, LocationResolver, RemoteFetch, RemoteStrategy, ResolutionStrategy, ResolvedPath,
    SyntheticStrategy, TierOutcome, SYNTHETIC_CHILDREN,
};

#[cfg(feature = "remote")]
#[doc(inline)]
pub use resolver::HttpFetcher;

/// Geometry engine, re-exported.
pub use plotgeom as geometry;
