//! Serialization helpers for the carrier's scalar formats

use crate::types::Timestamp;
use serde::Serializer;

/// Ship timestamps look like `2025-03-14T10:00:00 GMT+01:00`
pub const SHIP_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S GMT%:z";

/// Booleans travel as "Y" / "N"
pub mod yes_no {
    use super::*;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "Y" } else { "N" })
    }

    pub fn serialize_option<S: Serializer>(
        value: &Option<bool>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(flag) => serialize(flag, serializer),
            None => serializer.serialize_none(),
        }
    }
}

pub mod ship_timestamp {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(SHIP_TIMESTAMP_FORMAT))
    }
}

/// Format a decimal with a fixed number of places, without grouping
///
/// Rounds half away from zero. The scaled value is first snapped to nine
/// decimals so that 2.005, stored as 2.00499..., still rounds to 2.01.
pub fn fixed_decimal(value: f64, places: usize) -> String {
    let factor = 10f64.powi(places as i32);
    let scaled = (value * factor * 1e9).round() / 1e9;
    format!("{:.*}", places, scaled.round() / factor)
}
