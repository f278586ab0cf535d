use anyhow::{bail, Result};
use farmreg::{AdminLevel, AdminUnit, LocationPath, LocationResolver};

use crate::cli::{ChildrenArgs, Cli, PathArgs};
use super::load_config;

fn print_units(units: &[AdminUnit]) {
    for unit in units {
        let code = unit.code.as_deref().unwrap_or("-");
        println!("{:<32} {:<36} {:<6} {:?}", unit.id, unit.display_name, code, unit.origin);
    }
}

pub fn states(cli: &Cli) -> Result<()> {
    let resolver = LocationResolver::new(&load_config(cli)?)?;
    print_units(&resolver.states());
    Ok(())
}

pub async fn children(cli: &Cli, args: &ChildrenArgs) -> Result<()> {
    if args.level == AdminLevel::PollingUnit {
        bail!("Polling units have no children");
    }
    let resolver = LocationResolver::new(&load_config(cli)?)?;
    let units = resolver.children(args.level, &args.parent).await;
    if units.is_empty() {
        bail!("No data for {} '{}'", args.level, args.parent);
    }
    if units.iter().any(AdminUnit::is_synthetic) {
        eprintln!("warning: no real data for {} '{}'; showing placeholders", args.level, args.parent);
    }
    print_units(&units);
    Ok(())
}

pub async fn path(cli: &Cli, args: &PathArgs) -> Result<()> {
    let resolver = LocationResolver::new(&load_config(cli)?)?;
    let path = LocationPath::new(&args.state, &args.lga, &args.ward, args.polling_unit.as_deref());
    let resolved = resolver.resolve_path(&path).await?;

    println!("{}", resolved.display());
    if resolved.is_degraded() {
        eprintln!("warning: path includes placeholder units");
    }
    Ok(())
}
