//! Required-field checks for the request builders
//!
//! Copyright (c) 2025 Parcelwire Team
//! Licensed under the Apache-2.0 license

use super::{RateRequestBuilder, ShipmentRequestBuilder};
use crate::error::{Error, Result};

pub(super) fn required<'a, T>(value: &'a Option<T>, field: &str) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| Error::missing(field))
}

fn collect_missing(checks: &[(bool, &'static str)]) -> Vec<&'static str> {
    checks
        .iter()
        .filter(|(present, _)| !present)
        .map(|(_, field)| *field)
        .collect()
}

impl ShipmentRequestBuilder {
    /// Every required input not yet supplied, in the order `build()` checks them
    pub fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[
            (self.ready_at.is_some(), "ready_at"),
            (self.payer_account_number.is_some(), "payer_account_number"),
            (self.shipper.is_some(), "shipper"),
            (self.recipient.is_some(), "recipient"),
            (!self.packages.is_empty(), "packages"),
        ])
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl RateRequestBuilder {
    /// Every required input not yet supplied, in the order `build()` checks them
    pub fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[
            (self.ready_at.is_some(), "ready_at"),
            (self.payer_account_number.is_some(), "payer_account_number"),
            (self.shipper.is_some(), "shipper"),
            (self.recipient.is_some(), "recipient"),
            (!self.packages.is_empty(), "packages"),
        ])
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
