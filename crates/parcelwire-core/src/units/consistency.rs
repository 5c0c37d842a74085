//! Cross-package unit consistency checks
//!
//! All packages of one request must use the same canonical weight unit and
//! the same canonical dimension unit, and that shared pair must be one of the
//! two unit systems the carrier understands.
//!
//! Copyright (c) 2025 Parcelwire Team
//! Licensed under the Apache-2.0 license

use super::{DimensionUnit, UnitSystem, WeightUnit};
use crate::error::{Error, Quantity, Result};
use crate::types::Package;

/// Check that every package shares the units of the first one
///
/// Returns the shared `(weight, dimension)` pair. An empty list has no unit
/// pair to share and fails with [`Error::EmptyPackageList`].
pub fn check_consistent_uom(packages: &[Package]) -> Result<(WeightUnit, DimensionUnit)> {
    let first = packages.first().ok_or(Error::EmptyPackageList)?;
    let weight_unit = first.weight().unit;
    let dimension_unit = first.dimensions().unit;

    for package in packages {
        if package.weight().unit != weight_unit {
            return Err(Error::InconsistentUnit {
                quantity: Quantity::Weight,
                sequence_number: package.sequence_number(),
                expected: weight_unit.to_string(),
                found: package.weight().unit.to_string(),
            });
        }

        if package.dimensions().unit != dimension_unit {
            return Err(Error::InconsistentUnit {
                quantity: Quantity::Dimension,
                sequence_number: package.sequence_number(),
                expected: dimension_unit.to_string(),
                found: package.dimensions().unit.to_string(),
            });
        }
    }

    Ok((weight_unit, dimension_unit))
}

/// Map a canonical unit pair onto the carrier's unit system code
pub fn map_uom(weight_unit: WeightUnit, dimension_unit: DimensionUnit) -> Result<UnitSystem> {
    match (weight_unit, dimension_unit) {
        (WeightUnit::Kg, DimensionUnit::Cm) => Ok(UnitSystem::Metric),
        (WeightUnit::Lb, DimensionUnit::In) => Ok(UnitSystem::Imperial),
        (weight, dimensions) => Err(Error::InconsistentUnitSystem {
            weight: weight.to_string(),
            dimensions: dimensions.to_string(),
        }),
    }
}

/// Derive the unit system shared by a package list
pub fn resolve_unit_system(packages: &[Package]) -> Result<UnitSystem> {
    let (weight_unit, dimension_unit) = check_consistent_uom(packages)?;
    map_uom(weight_unit, dimension_unit)
}
