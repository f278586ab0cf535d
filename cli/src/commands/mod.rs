pub mod area;
pub mod locate;

use anyhow::Result;
use farmreg::Config;

use crate::cli::Cli;

/// Config file (if any), then environment, then command-line flags.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    let mut config = config.with_env_overrides()?;
    if let Some(url) = &cli.remote {
        config.remote_base_url = Some(url.clone());
    }
    if let Some(secs) = cli.timeout {
        config.timeout_secs = secs;
    }
    config.validate()?;
    Ok(config)
}
