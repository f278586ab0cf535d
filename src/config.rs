use std::{env, fs, path::{Path, PathBuf}, time::Duration};

use anyhow::{ensure, Context, Result};
use plotgeom::{AreaMethod, Bounds, ValidationLimits};
use serde::{Deserialize, Serialize};

/// Options for the location resolver and boundary capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the remote lookup service; `None` skips the remote tier.
    pub remote_base_url: Option<String>,
    /// Deadline for one remote lookup, in seconds. Must be at least 1.
    pub timeout_secs: u64,
    /// Dataset file to use instead of the bundled one.
    pub dataset_path: Option<PathBuf>,
    /// Fill unresolvable levels with placeholder units. When off, an
    /// unresolvable parent yields an empty list.
    pub synthetic_fallback: bool,
    /// Envelope that captured boundary points must fall within.
    pub bounds: Bounds,
    /// Area limits applied when a boundary is finished.
    pub limits: ValidationLimits,
    /// Area formula for estimates and finished polygons.
    pub area_method: AreaMethod,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote_base_url: None,
            timeout_secs: 10,
            dataset_path: None,
            synthetic_fallback: true,
            bounds: Bounds::NIGERIA,
            limits: ValidationLimits::default(),
            area_method: AreaMethod::SphericalExcess,
        }
    }
}

impl Config {
    pub const ENV_REMOTE_URL: &'static str = "FARMREG_REMOTE_URL";
    pub const ENV_TIMEOUT_SECS: &'static str = "FARMREG_TIMEOUT_SECS";
    pub const ENV_DATASET: &'static str = "FARMREG_DATASET";

    /// Read a JSON config file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Reject settings that would silently disable a tier.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.timeout_secs > 0, "timeout_secs must be at least 1 second");
        Ok(())
    }

    /// Overlay `FARMREG_*` environment variables on top of this config.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = lookup(Self::ENV_REMOTE_URL) {
            self.remote_base_url = Some(url).filter(|u| !u.trim().is_empty());
        }
        if let Some(secs) = lookup(Self::ENV_TIMEOUT_SECS) {
            self.timeout_secs = secs.trim().parse()
                .with_context(|| format!("{} must be a whole number of seconds, got '{secs}'", Self::ENV_TIMEOUT_SECS))?;
        }
        if let Some(path) = lookup(Self::ENV_DATASET) {
            self.dataset_path = Some(PathBuf::from(path));
        }
        self.validate()?;
        Ok(self)
    }

    #[inline] pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }
}
