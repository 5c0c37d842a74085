//! Units of measurement and their normalization
//!
//! The carrier accepts exactly two unit systems: metric (kilograms and
//! centimeters) and imperial (pounds and inches). Callers may describe
//! packages in any of the input units below; the normalizer collapses them to
//! a canonical unit before the consistency checks run.
//!
//! - `normalizer`: input unit parsing and conversion to canonical units
//! - `consistency`: cross-package unit checks and unit-system derivation
//!
//! Copyright (c) 2025 Parcelwire Team
//! Licensed under the Apache-2.0 license

pub mod consistency;
pub mod normalizer;

use crate::error::{Error, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use consistency::{check_consistent_uom, map_uom, resolve_unit_system};
pub use normalizer::{normalize_dimensions, normalize_weight, Dimensions, Weight};

/// Canonical weight unit accepted by the carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    #[serde(rename = "KG")]
    Kg,
    #[serde(rename = "LB")]
    Lb,
}

/// Canonical dimension unit accepted by the carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimensionUnit {
    #[serde(rename = "CM")]
    Cm,
    #[serde(rename = "IN")]
    In,
}

/// Unit system code placed on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Kilograms and centimeters
    #[serde(rename = "SI")]
    Metric,
    /// Pounds and inches
    #[serde(rename = "SU")]
    Imperial,
}

/// Weight unit as supplied by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassUnit {
    Kilogram,
    Pound,
    Gram,
    Ounce,
}

/// Length unit as supplied by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Centimeter,
    Inch,
    Millimeter,
    Meter,
    Foot,
    Yard,
}

impl WeightUnit {
    pub fn code(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "KG",
            WeightUnit::Lb => "LB",
        }
    }
}

impl DimensionUnit {
    pub fn code(&self) -> &'static str {
        match self {
            DimensionUnit::Cm => "CM",
            DimensionUnit::In => "IN",
        }
    }
}

impl UnitSystem {
    pub fn code(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "SI",
            UnitSystem::Imperial => "SU",
        }
    }
}

impl MassUnit {
    pub const ALL: [MassUnit; 4] = [
        MassUnit::Kilogram,
        MassUnit::Pound,
        MassUnit::Gram,
        MassUnit::Ounce,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            MassUnit::Kilogram => "KG",
            MassUnit::Pound => "LB",
            MassUnit::Gram => "G",
            MassUnit::Ounce => "OZ",
        }
    }
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 6] = [
        LengthUnit::Centimeter,
        LengthUnit::Inch,
        LengthUnit::Millimeter,
        LengthUnit::Meter,
        LengthUnit::Foot,
        LengthUnit::Yard,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            LengthUnit::Centimeter => "CM",
            LengthUnit::Inch => "IN",
            LengthUnit::Millimeter => "MM",
            LengthUnit::Meter => "M",
            LengthUnit::Foot => "FT",
            LengthUnit::Yard => "YD",
        }
    }
}

impl FromStr for MassUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "KG" => Ok(MassUnit::Kilogram),
            "LB" => Ok(MassUnit::Pound),
            "G" => Ok(MassUnit::Gram),
            "OZ" => Ok(MassUnit::Ounce),
            _ => Err(Error::InvalidUnit {
                quantity: Quantity::Weight,
                unit: s.to_string(),
            }),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CM" => Ok(LengthUnit::Centimeter),
            "IN" => Ok(LengthUnit::Inch),
            "MM" => Ok(LengthUnit::Millimeter),
            "M" => Ok(LengthUnit::Meter),
            "FT" => Ok(LengthUnit::Foot),
            "YD" => Ok(LengthUnit::Yard),
            _ => Err(Error::InvalidUnit {
                quantity: Quantity::Dimension,
                unit: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for DimensionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
