use anyhow::{bail, Result};
use serde::Serialize;

use crate::{boundary::FarmPolygon, hierarchy::LocationPath};

/// What the core contributes to a farm record: where the farm is in the
/// administrative hierarchy and the boundary captured on site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmRecord {
    pub location: LocationPath,
    pub boundary: Option<FarmPolygon>,
}

impl FarmRecord {
    pub fn new(location: LocationPath, boundary: Option<FarmPolygon>) -> Self {
        Self { location, boundary }
    }

    /// Area of the captured boundary, if any.
    pub fn area_hectares(&self) -> Option<f64> {
        self.boundary.as_ref().map(FarmPolygon::area_hectares)
    }

    /// A farm record needs State, LGA and Ward without gaps, and a boundary.
    pub fn validate(&self) -> Result<()> {
        self.location.validate()?;
        if !self.location.is_complete() {
            bail!("Farm location must include state, LGA and ward (have '{}')", self.location);
        }
        if self.boundary.is_none() {
            bail!("Farm boundary has not been captured");
        }
        Ok(())
    }
}
