use std::path::PathBuf;

use farmreg::AdminLevel;

/// Farmer registration location and boundary tools (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "farmreg", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON config file
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Remote lookup service base URL (overrides config)
    #[arg(long, global = true)]
    pub remote: Option<String>,

    /// Remote lookup timeout in seconds (overrides config)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List all states
    States,

    /// List the units below a parent, e.g. `children state lagos`
    Children(ChildrenArgs),

    /// Check a location path and print its display names
    Path(PathArgs),

    /// Validate a captured boundary and report its area
    Area(AreaArgs),
}

#[derive(clap::Args, Debug)]
pub struct ChildrenArgs {
    /// Level of the parent: state, lga or ward
    pub level: AdminLevel,

    /// Parent id, e.g. "lagos" or "eti-osa"
    pub parent: String,
}

#[derive(clap::Args, Debug)]
pub struct PathArgs {
    pub state: String,
    pub lga: String,
    pub ward: String,
    pub polling_unit: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct AreaArgs {
    /// JSON array of points: [lon, lat], {latitude, longitude}, {lat, lng} or GeoJSON Points
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub points: PathBuf,

    /// Use the ellipsoidal geodesic area instead of the spherical approximation
    #[arg(long)]
    pub geodesic: bool,
}
