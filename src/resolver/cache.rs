use std::sync::{Arc, PoisonError, RwLock};

use ahash::AHashMap;
use serde::Serialize;

use crate::hierarchy::{AdminLevel, AdminUnit};

type Tier = RwLock<AHashMap<String, Arc<[AdminUnit]>>>;

/// Session-scoped, append-only cache with one tier per hierarchy level.
///
/// Each child-list tier is keyed by normalized parent id. Entries are never
/// replaced once published: when two lookups for the same parent race, the
/// first insert wins and both callers get that list.
#[derive(Debug, Default)]
pub(crate) struct LevelCache {
    states: RwLock<Option<Arc<[AdminUnit]>>>,
    lgas: Tier,            // by state id
    wards: Tier,           // by LGA id
    polling_units: Tier,   // by ward id
}

/// Number of cached entries per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub states: usize,
    pub lgas: usize,
    pub wards: usize,
    pub polling_units: usize,
}

impl LevelCache {
    fn tier(&self, child_level: AdminLevel) -> Option<&Tier> {
        match child_level {
            AdminLevel::State => None,
            AdminLevel::Lga => Some(&self.lgas),
            AdminLevel::Ward => Some(&self.wards),
            AdminLevel::PollingUnit => Some(&self.polling_units),
        }
    }

    pub(crate) fn states(&self) -> Option<Arc<[AdminUnit]>> {
        self.states.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Publish the state list unless one is already cached; returns the cached list.
    pub(crate) fn publish_states(&self, units: Arc<[AdminUnit]>) -> Arc<[AdminUnit]> {
        let mut slot = self.states.write().unwrap_or_else(PoisonError::into_inner);
        slot.get_or_insert(units).clone()
    }

    pub(crate) fn get(&self, child_level: AdminLevel, parent_key: &str) -> Option<Arc<[AdminUnit]>> {
        let tier = self.tier(child_level)?;
        tier.read().unwrap_or_else(PoisonError::into_inner).get(parent_key).cloned()
    }

    /// Publish a child list unless one is already cached; returns the cached list.
    pub(crate) fn publish(&self, child_level: AdminLevel, parent_key: &str, units: Arc<[AdminUnit]>) -> Arc<[AdminUnit]> {
        let Some(tier) = self.tier(child_level) else { return units };
        let mut map = tier.write().unwrap_or_else(PoisonError::into_inner);
        map.entry(parent_key.to_string()).or_insert(units).clone()
    }

    pub(crate) fn clear(&self) {
        *self.states.write().unwrap_or_else(PoisonError::into_inner) = None;
        for tier in [&self.lgas, &self.wards, &self.polling_units] {
            tier.write().unwrap_or_else(PoisonError::into_inner).clear();
        }
    }

    pub(crate) fn stats(&self) -> CacheStats {
        let len = |tier: &Tier| tier.read().unwrap_or_else(PoisonError::into_inner).len();
        CacheStats {
            states: self.states().map_or(0, |s| s.len()),
            lgas: len(&self.lgas),
            wards: len(&self.wards),
            polling_units: len(&self.polling_units),
        }
    }
}
