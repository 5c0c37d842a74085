//! Wire structures shared by the rate and shipment requests

use serde::Serialize;

/// Service code for declared-value insurance
pub const SERVICE_TYPE_INSURANCE: &str = "II";

/// Service code for paperless trade
pub const SERVICE_TYPE_PAPERLESS_TRADE: &str = "WY";

/// How the parcel reaches the carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DropOffType {
    /// Collected on the regular pickup round
    RegularPickup,
    /// A courier must be requested
    RequestCourier,
}

impl DropOffType {
    pub fn from_unscheduled_pickup(unscheduled_pickup: bool) -> Self {
        if unscheduled_pickup {
            DropOffType::RequestCourier
        } else {
            DropOffType::RegularPickup
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub street_lines: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_lines2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_lines3: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Service {
    pub service_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

impl Service {
    pub fn new(service_type: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
            service_value: None,
            currency_code: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpecialServices {
    #[serde(rename = "Service")]
    pub services: Vec<Service>,
}

impl SpecialServices {
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
