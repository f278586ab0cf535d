use std::fs;

use anyhow::{bail, Context, Result};
use farmreg::geometry::{
    normalize_ring, polygon_perimeter, validate_boundary_with, AreaMethod,
};
use serde_json::Value;

use crate::cli::{AreaArgs, Cli};
use super::load_config;

pub fn run(cli: &Cli, args: &AreaArgs) -> Result<()> {
    let config = load_config(cli)?;
    let text = fs::read_to_string(&args.points)
        .with_context(|| format!("Failed to read points file: {}", args.points.display()))?;
    let values: Vec<Value> = serde_json::from_str(&text)
        .with_context(|| format!("Expected a JSON array of points in {}", args.points.display()))?;

    let (ring, skipped) = normalize_ring(&values);
    if !skipped.is_empty() {
        eprintln!("warning: ignored {} unrecognized point(s) at index {:?}", skipped.len(), skipped);
    }

    let method = if args.geodesic { AreaMethod::Geodesic } else { config.area_method };
    match validate_boundary_with(&ring, &config.bounds, &config.limits, method) {
        Ok(report) => {
            println!("area:      {}", report.display);
            println!("hectares:  {:.4}", report.area_hectares);
            println!("perimeter: {:.1} m", polygon_perimeter(&ring));
            println!("points:    {}", ring.len());
            Ok(())
        }
        Err(e) => bail!("Boundary rejected: {e}"),
    }
}
