mod cache;
mod remote;
mod resolver;
mod strategy;

pub use cache::CacheStats;
pub use remote::RemoteFetch;
#[cfg(feature = "remote")]
pub use remote::HttpFetcher;
pub use resolver::{LocationResolver, ResolvedPath};
pub use strategy::{
    BundledStrategy, RemoteStrategy, ResolutionStrategy, SyntheticStrategy, TierOutcome, SYNTHETIC_CHILDREN,
};
