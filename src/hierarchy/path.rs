use std::fmt;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::level::AdminLevel;

/// Foreign-key tuple locating a farmer or farm in the hierarchy.
/// A set field implies every field above it is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationPath {
    pub state_id: Option<String>,
    pub lga_id: Option<String>,
    pub ward_id: Option<String>,
    pub polling_unit_id: Option<String>,
}

impl LocationPath {
    /// Path down to a ward, with an optional polling unit.
    pub fn new(state: &str, lga: &str, ward: &str, polling_unit: Option<&str>) -> Self {
        Self {
            state_id: Some(state.to_string()),
            lga_id: Some(lga.to_string()),
            ward_id: Some(ward.to_string()),
            polling_unit_id: polling_unit.map(str::to_string),
        }
    }

    pub fn get(&self, level: AdminLevel) -> Option<&str> {
        match level {
            AdminLevel::State => self.state_id.as_deref(),
            AdminLevel::Lga => self.lga_id.as_deref(),
            AdminLevel::Ward => self.ward_id.as_deref(),
            AdminLevel::PollingUnit => self.polling_unit_id.as_deref(),
        }
    }

    /// Set one level. Clearing a level also clears everything below it,
    /// as a cascading selector does.
    pub fn set(&mut self, level: AdminLevel, value: Option<String>) {
        let cleared = value.is_none();
        match level {
            AdminLevel::State => self.state_id = value,
            AdminLevel::Lga => self.lga_id = value,
            AdminLevel::Ward => self.ward_id = value,
            AdminLevel::PollingUnit => self.polling_unit_id = value,
        }
        if cleared {
            let mut below = level.child();
            while let Some(l) = below {
                self.set(l, None);
                below = l.child();
            }
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, level: AdminLevel, id: &str) -> Self {
        self.set(level, Some(id.to_string()));
        self
    }

    /// Number of leading levels that are set.
    pub fn depth(&self) -> usize {
        AdminLevel::order().iter().take_while(|&&l| self.get(l).is_some()).count()
    }

    /// The deepest level that is set.
    pub fn deepest(&self) -> Option<AdminLevel> {
        self.depth().checked_sub(1).map(|i| AdminLevel::order()[i])
    }

    /// Error if some level is set while a level above it is not, or if a set id is blank.
    pub fn validate(&self) -> Result<()> {
        let mut missing: Option<AdminLevel> = None;
        for level in AdminLevel::order() {
            match self.get(level) {
                Some(id) if id.trim().is_empty() => bail!("Empty {level} id in location path"),
                Some(_) => {
                    if let Some(gap) = missing {
                        bail!("Location path has {level} set but no {gap}");
                    }
                }
                None => { missing.get_or_insert(level); }
            }
        }
        Ok(())
    }

    /// State, LGA and Ward are all present and there are no gaps.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok() && self.depth() >= 3
    }
}

impl fmt::Display for LocationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = AdminLevel::order().iter().filter_map(|&l| self.get(l)).collect();
        write!(f, "{}", parts.join(" / "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_without_polling_unit() {
        let p = LocationPath::new("lagos", "ikeja", "ojodu", None);
        assert!(p.is_complete());
        assert_eq!(p.depth(), 3);
        assert_eq!(p.deepest(), Some(AdminLevel::Ward));
        assert_eq!(p.to_string(), "lagos / ikeja / ojodu");
    }

    #[test]
    fn gap_is_rejected() {
        let p = LocationPath { state_id: Some("lagos".into()), ward_id: Some("ojodu".into()), ..Default::default() };
        assert!(p.validate().is_err());
        assert!(!p.is_complete());
    }

    #[test]
    fn blank_id_is_rejected() {
        let p = LocationPath::default().with(AdminLevel::State, " ");
        assert!(p.validate().is_err());
    }

    #[test]
    fn clearing_cascades_down() {
        let mut p = LocationPath::new("lagos", "ikeja", "ojodu", Some("berger-bus-stop"));
        p.set(AdminLevel::Lga, None);
        assert_eq!(p, LocationPath::default().with(AdminLevel::State, "lagos"));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn empty_path_is_valid_but_incomplete() {
        let p = LocationPath::default();
        assert!(p.validate().is_ok());
        assert_eq!(p.deepest(), None);
        assert!(!p.is_complete());
    }
}
