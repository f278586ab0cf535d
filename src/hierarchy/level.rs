use std::{fmt, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Administrative tier. The hierarchy is exactly four levels deep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdminLevel {
    State,          // Highest-level unit
    Lga,            // Lga -> State
    Ward,           // Ward -> Lga
    PollingUnit,    // Lowest-level unit
}

impl AdminLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminLevel::State => "state",
            AdminLevel::Lga => "lga",
            AdminLevel::Ward => "ward",
            AdminLevel::PollingUnit => "polling-unit",
        }
    }

    /// Path segment used by the remote lookup service for lists of this level.
    pub fn endpoint(&self) -> &'static str {
        match self {
            AdminLevel::State => "states",
            AdminLevel::Lga => "lgas",
            AdminLevel::Ward => "wards",
            AdminLevel::PollingUnit => "polling-units",
        }
    }

    pub fn order() -> [AdminLevel; 4] {
        [AdminLevel::State, AdminLevel::Lga, AdminLevel::Ward, AdminLevel::PollingUnit]
    }

    /// Position in the hierarchy, State = 0.
    pub fn depth(&self) -> usize { *self as usize }

    pub fn parent(&self) -> Option<AdminLevel> {
        match self {
            AdminLevel::State => None,
            AdminLevel::Lga => Some(AdminLevel::State),
            AdminLevel::Ward => Some(AdminLevel::Lga),
            AdminLevel::PollingUnit => Some(AdminLevel::Ward),
        }
    }

    pub fn child(&self) -> Option<AdminLevel> {
        match self {
            AdminLevel::State => Some(AdminLevel::Lga),
            AdminLevel::Lga => Some(AdminLevel::Ward),
            AdminLevel::Ward => Some(AdminLevel::PollingUnit),
            AdminLevel::PollingUnit => None,
        }
    }
}

impl fmt::Display for AdminLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "state" | "states" => Ok(AdminLevel::State),
            "lga" | "lgas" => Ok(AdminLevel::Lga),
            "ward" | "wards" => Ok(AdminLevel::Ward),
            "pu" | "polling-unit" | "polling-units" => Ok(AdminLevel::PollingUnit),
            other => bail!("Unknown administrative level: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_child_are_inverse() {
        for level in AdminLevel::order() {
            if let Some(child) = level.child() {
                assert_eq!(child.parent(), Some(level));
            }
        }
        assert_eq!(AdminLevel::State.parent(), None);
        assert_eq!(AdminLevel::PollingUnit.child(), None);
    }

    #[test]
    fn depth_follows_order() {
        for (i, level) in AdminLevel::order().iter().enumerate() {
            assert_eq!(level.depth(), i);
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("LGA".parse::<AdminLevel>().unwrap(), AdminLevel::Lga);
        assert_eq!("pu".parse::<AdminLevel>().unwrap(), AdminLevel::PollingUnit);
        assert_eq!("polling_unit".parse::<AdminLevel>().unwrap(), AdminLevel::PollingUnit);
        assert!("county".parse::<AdminLevel>().is_err());
    }
}
