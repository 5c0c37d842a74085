//! Conversion of caller-supplied measurements into canonical units
//!
//! Copyright (c) 2025 Parcelwire Team
//! Licensed under the Apache-2.0 license

use super::{DimensionUnit, LengthUnit, MassUnit, WeightUnit};
use serde::{Deserialize, Serialize};

/// Decimal places kept on a normalized weight
pub const WEIGHT_PRECISION: i32 = 3;

/// A weight expressed in a canonical unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    pub unit: WeightUnit,
}

/// Package dimensions expressed in a canonical unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit: DimensionUnit,
}

/// Normalize a weight to kilograms or pounds
///
/// Grams collapse to kilograms and ounces to pounds. The converted value is
/// rounded to three decimal places.
pub fn normalize_weight(value: f64, unit: MassUnit) -> Weight {
    let (converted, unit) = match unit {
        MassUnit::Kilogram => (value, WeightUnit::Kg),
        MassUnit::Pound => (value, WeightUnit::Lb),
        MassUnit::Gram => (value / 1000.0, WeightUnit::Kg),
        MassUnit::Ounce => (value / 16.0, WeightUnit::Lb),
    };

    Weight {
        value: round_to(converted, WEIGHT_PRECISION),
        unit,
    }
}

/// Normalize dimensions to centimeters or inches
///
/// Dimensions are not rounded.
pub fn normalize_dimensions(length: f64, width: f64, height: f64, unit: LengthUnit) -> Dimensions {
    let (convert, unit): (fn(f64) -> f64, DimensionUnit) = match unit {
        LengthUnit::Centimeter => (|v| v, DimensionUnit::Cm),
        LengthUnit::Inch => (|v| v, DimensionUnit::In),
        LengthUnit::Millimeter => (|v| v / 10.0, DimensionUnit::Cm),
        LengthUnit::Meter => (|v| v * 100.0, DimensionUnit::Cm),
        LengthUnit::Foot => (|v| v * 12.0, DimensionUnit::In),
        LengthUnit::Yard => (|v| v * 36.0, DimensionUnit::In),
    };

    Dimensions {
        length: convert(length),
        width: convert(width),
        height: convert(height),
        unit,
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
