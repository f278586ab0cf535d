use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{level::AdminLevel, names::format_name};

/// Where a unit came from. Only `Synthetic` is non-authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Remote,
    Bundled,
    Synthetic,
}

/// One node of the State -> LGA -> Ward -> Polling Unit tree.
/// Immutable once built; the resolver hands these out behind `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdminUnit {
    pub level: AdminLevel,
    pub id: Arc<str>,            // Slug, unique among siblings, e.g. "eti-osa"
    pub display_name: Arc<str>,  // e.g. "Eti Osa"
    pub parent_id: Option<Arc<str>>,  // None only for State
    pub code: Option<Arc<str>>,  // Official code when the remote service supplies one
    pub origin: Origin,
}

impl AdminUnit {
    /// Build a unit whose display name is derived from its id.
    pub fn new(level: AdminLevel, id: &str, parent_id: Option<&str>, origin: Origin) -> Self {
        Self {
            level,
            id: Arc::from(id),
            display_name: Arc::from(format_name(id)),
            parent_id: parent_id.map(Arc::from),
            code: None,
            origin,
        }
    }

    pub fn with_code(mut self, code: Option<&str>) -> Self {
        self.code = code.filter(|c| !c.is_empty()).map(Arc::from);
        self
    }

    #[inline] pub fn is_synthetic(&self) -> bool { self.origin == Origin::Synthetic }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_derived_from_id() {
        let u = AdminUnit::new(AdminLevel::Lga, "eti-osa", Some("lagos"), Origin::Bundled);
        assert_eq!(&*u.display_name, "Eti Osa");
        assert_eq!(u.parent_id.as_deref(), Some("lagos"));
        assert!(!u.is_synthetic());
    }

    #[test]
    fn empty_code_is_dropped() {
        let u = AdminUnit::new(AdminLevel::State, "kano", None, Origin::Remote).with_code(Some(""));
        assert_eq!(u.code, None);
    }
}
