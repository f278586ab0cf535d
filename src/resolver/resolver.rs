use std::sync::Arc;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::{
    config::Config,
    dataset::Dataset,
    hierarchy::{normalize_id, AdminLevel, AdminUnit, LocationPath},
};
use super::{
    cache::{CacheStats, LevelCache},
    remote::RemoteFetch,
    strategy::{BundledStrategy, RemoteStrategy, ResolutionStrategy, SyntheticStrategy, TierOutcome},
};

/// Resolves the State -> LGA -> Ward -> Polling Unit hierarchy one level at a
/// time, through an ordered chain of strategies, with a session-scoped cache.
///
/// Construct once per session and share by reference (or `Arc`); all methods
/// take `&self` and the cache is safe to use from concurrent lookups.
#[derive(Debug)]
pub struct LocationResolver {
    dataset: Arc<Dataset>,
    strategies: Vec<Box<dyn ResolutionStrategy>>,
    cache: LevelCache,
}

/// Units along a validated location path, State first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPath {
    pub units: Vec<AdminUnit>,
}

impl ResolvedPath {
    /// Any unit along the path came from the synthetic tier.
    pub fn is_degraded(&self) -> bool { self.units.iter().any(AdminUnit::is_synthetic) }

    /// "Lagos / Ikeja / Ojodu"
    pub fn display(&self) -> String {
        self.units.iter().map(|u| &*u.display_name).collect::<Vec<_>>().join(" / ")
    }
}

impl LocationResolver {
    /// Build the standard chain from config: remote (when a base URL is set
    /// and the `remote` feature is on), bundled dataset, then synthetic
    /// (unless disabled).
    pub fn new(config: &Config) -> Result<Self> {
        #[cfg(feature = "remote")]
        let fetcher: Option<Arc<dyn RemoteFetch>> = match &config.remote_base_url {
            Some(_) => Some(Arc::new(super::remote::HttpFetcher::new(config.timeout())?)),
            None => None,
        };
        #[cfg(not(feature = "remote"))]
        let fetcher: Option<Arc<dyn RemoteFetch>> = None;

        Self::with_fetcher(config, fetcher)
    }

    /// Build the standard chain with a caller-supplied remote capability.
    pub fn with_fetcher(config: &Config, fetcher: Option<Arc<dyn RemoteFetch>>) -> Result<Self> {
        config.validate()?;
        let dataset = Arc::new(match &config.dataset_path {
            Some(path) => Dataset::from_path(path)?,
            None => Dataset::bundled()?,
        });

        let mut strategies: Vec<Box<dyn ResolutionStrategy>> = Vec::with_capacity(3);
        match (&config.remote_base_url, fetcher) {
            (Some(url), Some(fetcher)) => {
                strategies.push(Box::new(RemoteStrategy::new(url, config.timeout(), fetcher)));
            }
            (Some(url), None) => warn!(%url, "remote base URL set but no fetcher available; skipping remote tier"),
            (None, _) => {}
        }
        strategies.push(Box::new(BundledStrategy::new(dataset.clone())));
        if config.synthetic_fallback {
            strategies.push(Box::new(SyntheticStrategy));
        }

        Ok(Self::with_strategies(dataset, strategies))
    }

    /// Use an explicit strategy chain. `dataset` supplies the state list.
    pub fn with_strategies(dataset: Arc<Dataset>, strategies: Vec<Box<dyn ResolutionStrategy>>) -> Self {
        debug!(
            tiers = ?strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            dataset_version = dataset.version().unwrap_or("unknown"),
            "location resolver ready"
        );
        Self { dataset, strategies, cache: LevelCache::default() }
    }

    /// Names of the strategies in the order they are tried.
    pub fn tiers(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// All states. Served from the bundled list, never from the network.
    /// The bundled list has 37 units: 36 states and the Federal Capital Territory.
    pub fn states(&self) -> Arc<[AdminUnit]> {
        if let Some(states) = self.cache.states() {
            return states;
        }
        self.cache.publish_states(self.dataset.states())
    }

    /// Children of `parent_id`, one level below `parent_level`.
    ///
    /// An empty `parent_id` (nothing selected yet) yields an empty list. A
    /// cached list is returned as-is; otherwise each strategy is tried in
    /// order and the first non-empty result is cached and returned. Failures
    /// never reach the caller: if every tier comes back empty the result is
    /// an empty list, which is not cached.
    pub async fn children(&self, parent_level: AdminLevel, parent_id: &str) -> Arc<[AdminUnit]> {
        let key = normalize_id(parent_id);
        let Some(child_level) = parent_level.child() else { return empty() };
        if key.is_empty() { return empty() }

        if let Some(hit) = self.cache.get(child_level, &key) {
            trace!(level = %child_level, parent = %key, "cache hit");
            return hit;
        }

        for strategy in &self.strategies {
            match strategy.resolve(parent_level, &key).await {
                TierOutcome::Found(units) => {
                    if units.iter().all(AdminUnit::is_synthetic) {
                        warn!(level = %child_level, parent = %key, "no real data; serving placeholder units");
                    } else {
                        debug!(level = %child_level, parent = %key, tier = strategy.name(), count = units.len(), "resolved");
                    }
                    return self.cache.publish(child_level, &key, units.into());
                }
                TierOutcome::Empty => {
                    debug!(level = %child_level, parent = %key, tier = strategy.name(), "tier had no data");
                }
                TierOutcome::Failed(err) => {
                    warn!(level = %child_level, parent = %key, tier = strategy.name(), error = %format!("{err:#}"), "tier failed; falling back");
                }
            }
        }

        warn!(level = %child_level, parent = %key, "no tier resolved; returning empty list");
        empty()
    }

    pub async fn lgas(&self, state_id: &str) -> Arc<[AdminUnit]> {
        self.children(AdminLevel::State, state_id).await
    }

    pub async fn wards(&self, lga_id: &str) -> Arc<[AdminUnit]> {
        self.children(AdminLevel::Lga, lga_id).await
    }

    pub async fn polling_units(&self, ward_id: &str) -> Arc<[AdminUnit]> {
        self.children(AdminLevel::Ward, ward_id).await
    }

    /// Check every id of `path` against the units resolved for its parent and
    /// return those units. Errors on a gap or an id that is not among the
    /// resolved children.
    pub async fn resolve_path(&self, path: &LocationPath) -> Result<ResolvedPath> {
        path.validate()?;
        let mut units = Vec::with_capacity(path.depth());

        let mut parent: Option<(AdminLevel, String)> = None;
        for level in AdminLevel::order() {
            let Some(id) = path.get(level) else { break };
            let id = normalize_id(id);

            let candidates = match &parent {
                None => self.states(),
                Some((parent_level, parent_id)) => self.children(*parent_level, parent_id).await,
            };
            let unit = candidates.iter()
                .find(|u| *u.id == *id)
                .cloned()
                .with_context(|| match &parent {
                    None => format!("Unknown state '{id}'"),
                    Some((pl, pid)) => format!("Unknown {level} '{id}' under {pl} '{pid}'"),
                })?;

            units.push(unit);
            parent = Some((level, id));
        }

        if units.is_empty() {
            bail!("Location path is empty");
        }
        Ok(ResolvedPath { units })
    }

    /// Drop every cached list, e.g. after the dataset version changes.
    pub fn clear_cache(&self) {
        debug!("clearing location cache");
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats { self.cache.stats() }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
}

fn empty() -> Arc<[AdminUnit]> { Arc::from(Vec::new()) }
