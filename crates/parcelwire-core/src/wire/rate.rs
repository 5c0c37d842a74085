//! Rate request wire schema

use super::common::{Address, Dimensions, DropOffType, Service, SpecialServices};
use super::format::{ship_timestamp, yes_no};
use crate::types::Timestamp;
use crate::units::UnitSystem;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RateRequest {
    pub requested_shipment: RequestedShipment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestedShipment {
    pub drop_off_type: DropOffType,
    #[serde(serialize_with = "yes_no::serialize_option", skip_serializing_if = "Option::is_none")]
    pub next_business_day: Option<bool>,
    #[serde(with = "ship_timestamp")]
    pub ship_timestamp: Timestamp,
    pub unit_of_measurement: UnitSystem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_value: Option<f64>,
    // Tag name as published by the carrier
    #[serde(rename = "DeclaredValueCurrecyCode", skip_serializing_if = "Option::is_none")]
    pub declared_value_currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_info: Option<String>,
    pub account: String,
    pub ship: Ship,
    pub packages: Packages,
    pub special_services: SpecialServices,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ship {
    pub shipper: Address,
    pub recipient: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Packages {
    pub requested_packages: Vec<RequestedPackage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestedPackage {
    #[serde(rename = "@number")]
    pub number: u32,
    pub weight: PackageWeight,
    pub dimensions: Dimensions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageWeight {
    pub value: f64,
}

impl RateRequest {
    pub fn unit_of_measurement(&self) -> UnitSystem {
        self.requested_shipment.unit_of_measurement
    }

    pub fn packages(&self) -> &[RequestedPackage] {
        &self.requested_shipment.packages.requested_packages
    }

    pub fn special_services(&self) -> &[Service] {
        &self.requested_shipment.special_services.services
    }
}
