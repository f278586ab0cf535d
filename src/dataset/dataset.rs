use std::{fs, path::Path, sync::Arc};

use ahash::AHashMap;
use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::hierarchy::{normalize_id, AdminLevel, AdminUnit, Origin};

/// Hierarchy shipped with the crate.
const BUNDLED_JSON: &str = include_str!("../../data/nigeria.json");

#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    version: Option<String>,
    states: Vec<StateNode>,
}

#[derive(Debug, Deserialize)]
struct StateNode {
    id: String,
    #[serde(default)]
    lgas: Vec<LgaNode>,
}

#[derive(Debug, Deserialize)]
struct LgaNode {
    id: String,
    #[serde(default)]
    wards: Vec<WardNode>,
}

#[derive(Debug, Deserialize)]
struct WardNode {
    id: String,
    #[serde(default)]
    polling_units: Vec<String>,
}

/// Static State -> LGA -> Ward -> Polling Unit tree, flattened into
/// per-level child lists keyed by normalized parent id.
#[derive(Debug, Clone)]
pub struct Dataset {
    version: Option<String>,
    states: Arc<[AdminUnit]>,
    children: AHashMap<(AdminLevel, String), Arc<[AdminUnit]>>, // (child level, parent id) -> children
}

impl Dataset {
    /// The dataset compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_JSON).context("Failed to parse bundled location dataset")
    }

    /// Load a dataset file with the same layout as the bundled one.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read location dataset: {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Failed to parse location dataset: {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let file: DatasetFile = serde_json::from_str(text)?;
        if file.states.is_empty() {
            bail!("Location dataset has no states");
        }

        let mut states = Vec::with_capacity(file.states.len());
        let mut children = AHashMap::new();

        for state in &file.states {
            let state_id = normalize_id(&state.id);
            states.push(AdminUnit::new(AdminLevel::State, &state_id, None, Origin::Bundled));

            let lgas = state.lgas.iter()
                .map(|lga| AdminUnit::new(AdminLevel::Lga, &normalize_id(&lga.id), Some(&state_id), Origin::Bundled))
                .collect::<Vec<_>>();
            insert_children(&mut children, AdminLevel::Lga, &state_id, lgas)?;

            for lga in &state.lgas {
                let lga_id = normalize_id(&lga.id);
                let wards = lga.wards.iter()
                    .map(|ward| AdminUnit::new(AdminLevel::Ward, &normalize_id(&ward.id), Some(&lga_id), Origin::Bundled))
                    .collect::<Vec<_>>();
                insert_children(&mut children, AdminLevel::Ward, &lga_id, wards)?;

                for ward in &lga.wards {
                    let ward_id = normalize_id(&ward.id);
                    let units = ward.polling_units.iter()
                        .map(|pu| AdminUnit::new(AdminLevel::PollingUnit, &normalize_id(pu), Some(&ward_id), Origin::Bundled))
                        .collect::<Vec<_>>();
                    insert_children(&mut children, AdminLevel::PollingUnit, &ward_id, units)?;
                }
            }
        }

        check_unique(&states)?;

        Ok(Self { version: file.version, states: states.into(), children })
    }

    /// Dataset version string, if the file carries one.
    pub fn version(&self) -> Option<&str> { self.version.as_deref() }

    /// All top-level units.
    pub fn states(&self) -> Arc<[AdminUnit]> { self.states.clone() }

    /// Children of `parent_id` one level below `parent_level`.
    /// The id is matched case-insensitively with spaces/underscores treated as hyphens.
    /// Returns an empty list when the parent is unknown or has no children in this dataset.
    pub fn children(&self, parent_level: AdminLevel, parent_id: &str) -> Arc<[AdminUnit]> {
        parent_level.child()
            .and_then(|level| self.children.get(&(level, normalize_id(parent_id))))
            .cloned()
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }

    /// Whether a unit with this id exists at `level` anywhere in the dataset.
    pub fn contains(&self, level: AdminLevel, id: &str) -> bool {
        let id = normalize_id(id);
        match level {
            AdminLevel::State => self.states.iter().any(|u| *u.id == *id),
            _ => self.children.iter()
                .filter(|((l, _), _)| *l == level)
                .any(|(_, units)| units.iter().any(|u| *u.id == *id)),
        }
    }

    /// Number of parents with a child list, per child level.
    pub fn coverage(&self, level: AdminLevel) -> usize {
        self.children.keys().filter(|(l, _)| *l == level).count()
    }
}

/// Record a child list. Empty lists are skipped so that a parent the dataset
/// knows nothing below looks the same as an unknown parent.
fn insert_children(
    children: &mut AHashMap<(AdminLevel, String), Arc<[AdminUnit]>>,
    level: AdminLevel,
    parent_id: &str,
    units: Vec<AdminUnit>,
) -> Result<()> {
    if units.is_empty() { return Ok(()) }
    check_unique(&units)?;
    // Sibling ids are unique per parent; the same parent id under two
    // grandparents keeps the first list.
    children.entry((level, parent_id.to_string())).or_insert_with(|| units.into());
    Ok(())
}

fn check_unique(units: &[AdminUnit]) -> Result<()> {
    let mut seen = ahash::AHashSet::with_capacity(units.len());
    for unit in units {
        if !seen.insert(unit.id.clone()) {
            bail!("Duplicate {} id '{}' among siblings", unit.level, unit.id);
        }
    }
    Ok(())
}
