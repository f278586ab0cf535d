use std::{fmt, sync::Arc, time::Duration};

use ahash::AHashSet;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    dataset::Dataset,
    hierarchy::{format_name, normalize_id, slugify, AdminLevel, AdminUnit, Origin},
};
use super::remote::RemoteFetch;

/// Number of placeholder children produced by the synthetic tier.
pub const SYNTHETIC_CHILDREN: usize = 2;

/// Outcome of one resolution tier.
#[derive(Debug)]
pub enum TierOutcome {
    /// Non-empty, normalized child list.
    Found(Vec<AdminUnit>),
    /// The tier answered but had nothing for this parent.
    Empty,
    /// The tier could not answer (network error, timeout, bad payload).
    Failed(anyhow::Error),
}

/// One entry in the resolver's ordered fallback chain.
///
/// Every strategy emits `AdminUnit`s of the same shape; only `origin` differs.
#[async_trait]
pub trait ResolutionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn resolve(&self, parent_level: AdminLevel, parent_id: &str) -> TierOutcome;
}

impl fmt::Debug for dyn ResolutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResolutionStrategy({})", self.name())
    }
}

/// Body returned by the remote lookup service.
#[derive(Debug, Deserialize)]
struct RemoteResponse {
    success: bool,
    #[serde(default)]
    data: Vec<RemoteEntry>,
}

#[derive(Debug, Deserialize)]
struct RemoteEntry {
    #[serde(default)]
    id: Option<Value>,
    name: String,
    #[serde(default)]
    code: Option<Value>,
}

/// Tier 1: remote lookup service, bounded by a deadline.
pub struct RemoteStrategy {
    base_url: String,
    timeout: Duration,
    fetcher: Arc<dyn RemoteFetch>,
}

impl RemoteStrategy {
    pub fn new(base_url: &str, timeout: Duration, fetcher: Arc<dyn RemoteFetch>) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string(), timeout, fetcher }
    }

    /// e.g. `https://host/api/wards/ikeja`
    fn url(&self, child_level: AdminLevel, parent_id: &str) -> String {
        format!("{}/{}/{}", self.base_url, child_level.endpoint(), normalize_id(parent_id))
    }
}

#[async_trait]
impl ResolutionStrategy for RemoteStrategy {
    fn name(&self) -> &'static str { "remote" }

    async fn resolve(&self, parent_level: AdminLevel, parent_id: &str) -> TierOutcome {
        let Some(child_level) = parent_level.child() else { return TierOutcome::Empty };
        let url = self.url(child_level, parent_id);
        debug!(%url, timeout_secs = self.timeout.as_secs_f64(), "remote lookup");

        // A timed-out fetch is dropped here, which cancels it.
        let body = match tokio::time::timeout(self.timeout, self.fetcher.fetch_json(&url)).await {
            Ok(Ok(body)) => body,
            Ok(Err(e)) => return TierOutcome::Failed(e.context(format!("GET {url}"))),
            Err(_) => return TierOutcome::Failed(anyhow::anyhow!("GET {url} timed out after {:?}", self.timeout)),
        };

        let response: RemoteResponse = match serde_json::from_value(body) {
            Ok(r) => r,
            Err(e) => return TierOutcome::Failed(anyhow::Error::new(e).context(format!("Unexpected response from {url}"))),
        };
        if !response.success {
            return TierOutcome::Failed(anyhow::anyhow!("{url} reported success=false"));
        }

        let parent = normalize_id(parent_id);
        let mut seen = AHashSet::with_capacity(response.data.len());
        let mut units = Vec::with_capacity(response.data.len());
        for unit in response.data.iter().filter_map(|entry| remote_unit(child_level, &parent, entry)) {
            if seen.insert(unit.id.clone()) {
                units.push(unit);
            } else {
                warn!(%url, id = %unit.id, name = %unit.display_name, "duplicate id in remote list; keeping the first");
            }
        }

        if units.is_empty() { TierOutcome::Empty } else { TierOutcome::Found(units) }
    }
}

/// Normalize one remote entry. The id is taken from the entry when it has a
/// textual one, otherwise slugged from the name; entries with neither are dropped.
fn remote_unit(level: AdminLevel, parent_id: &str, entry: &RemoteEntry) -> Option<AdminUnit> {
    let raw_id = match &entry.id {
        Some(Value::String(s)) if !s.trim().is_empty() => slugify(s),
        _ => slugify(&entry.name),
    };
    if raw_id.is_empty() { return None }

    let code = entry.code.as_ref().and_then(code_text);
    let mut unit = AdminUnit::new(level, &raw_id, Some(parent_id), Origin::Remote)
        .with_code(code.as_deref());
    let name_slug = slugify(&entry.name);
    if !name_slug.is_empty() {
        unit.display_name = Arc::from(format_name(&name_slug));
    }
    Some(unit)
}

/// Codes arrive as strings or bare numbers; anything else is ignored.
fn code_text(code: &Value) -> Option<String> {
    match code {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Tier 2: the static dataset.
pub struct BundledStrategy {
    dataset: Arc<Dataset>,
}

impl BundledStrategy {
    pub fn new(dataset: Arc<Dataset>) -> Self { Self { dataset } }
}

#[async_trait]
impl ResolutionStrategy for BundledStrategy {
    fn name(&self) -> &'static str { "bundled" }

    async fn resolve(&self, parent_level: AdminLevel, parent_id: &str) -> TierOutcome {
        let units = self.dataset.children(parent_level, parent_id);
        if units.is_empty() { TierOutcome::Empty } else { TierOutcome::Found(units.to_vec()) }
    }
}

/// Tier 3: deterministic placeholders named after the parent, tagged
/// `Origin::Synthetic` so callers can tell degraded data apart.
#[derive(Debug, Default)]
pub struct SyntheticStrategy;

impl SyntheticStrategy {
    pub fn placeholders(parent_level: AdminLevel, parent_id: &str) -> Vec<AdminUnit> {
        let Some(child_level) = parent_level.child() else { return Vec::new() };
        let parent = normalize_id(parent_id);
        (1..=SYNTHETIC_CHILDREN)
            .map(|n| {
                let id = format!("{parent}-{}-{n}", child_level.as_str());
                AdminUnit::new(child_level, &id, Some(&parent), Origin::Synthetic)
            })
            .collect()
    }
}

#[async_trait]
impl ResolutionStrategy for SyntheticStrategy {
    fn name(&self) -> &'static str { "synthetic" }

    async fn resolve(&self, parent_level: AdminLevel, parent_id: &str) -> TierOutcome {
        let units = Self::placeholders(parent_level, parent_id);
        if units.is_empty() { TierOutcome::Empty } else { TierOutcome::Found(units) }
    }
}
