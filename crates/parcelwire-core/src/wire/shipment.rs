//! Shipment request wire schema
//!
//! Field order follows the carrier's published schema; serializers must not
//! reorder these structs.

use super::common::{Address, Dimensions, DropOffType, Service, SpecialServices};
use super::format::{ship_timestamp, yes_no};
use crate::types::{ExportDeclaration, Timestamp};
use crate::units::UnitSystem;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentRequest {
    pub requested_shipment: RequestedShipment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestedShipment {
    pub shipment_info: ShipmentInfo,
    #[serde(with = "ship_timestamp")]
    pub ship_timestamp: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_info: Option<String>,
    pub international_detail: InternationalDetail,
    pub ship: Ship,
    pub packages: Packages,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dangerous_goods: Option<DangerousGoods>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentInfo {
    pub drop_off_type: DropOffType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    pub billing: Billing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_services: Option<SpecialServices>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub unit_of_measurement: UnitSystem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paperless_trade_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paperless_trade_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_pickup_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_images: Option<DocumentImages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_options: Option<LabelOptions>,
}

/// Who pays for the shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShippingPaymentType {
    /// Shipper account
    #[serde(rename = "S")]
    Shipper,
    /// Receiver or third-party billing account
    #[serde(rename = "R")]
    Receiver,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Billing {
    pub shipper_account_number: String,
    pub shipping_payment_type: ShippingPaymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_account_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentImages {
    #[serde(rename = "DocumentImage")]
    pub images: Vec<DocumentImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentImage {
    pub document_image: String,
    pub document_image_format: String,
    pub document_image_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelOptions {
    #[serde(rename = "RequestWaybillDocument", with = "yes_no")]
    pub request_waybill_document: bool,
    #[serde(
        rename = "RequestDHLCustomsInvoice",
        serialize_with = "yes_no::serialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_customs_invoice: Option<bool>,
    #[serde(rename = "DHLCustomsInvoiceLanguageCode", skip_serializing_if = "Option::is_none")]
    pub customs_invoice_language_code: Option<String>,
    #[serde(rename = "DHLCustomsInvoiceType", skip_serializing_if = "Option::is_none")]
    pub customs_invoice_type: Option<String>,
    #[serde(rename = "RequestShipmentReceipt", with = "yes_no")]
    pub request_shipment_receipt: bool,
    #[serde(rename = "CustomerLogo", skip_serializing_if = "Option::is_none")]
    pub customer_logo: Option<CustomerLogo>,
    #[serde(rename = "RequestBarcodeInfo", with = "yes_no")]
    pub request_barcode_info: bool,
    #[serde(rename = "RequestDHLLogoOnLabel", with = "yes_no")]
    pub request_carrier_logo_on_label: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerLogo {
    pub logo_image: String,
    pub logo_image_format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InternationalDetail {
    pub commodities: Commodities,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_declaration: Option<ExportDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Commodities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_pieces: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ship {
    pub shipper: ContactInfo,
    pub recipient: ContactInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_contact_info: Option<ContactInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactInfo {
    pub contact: Contact,
    pub address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_numbers: Option<RegistrationNumbers>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    pub person_name: String,
    pub company_name: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationNumbers {
    #[serde(rename = "RegistrationNumber")]
    pub numbers: Vec<RegistrationNumber>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegistrationNumber {
    pub number: String,
    pub number_type_code: String,
    pub number_issuer_country_code: String,
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
    pub weight: f64,
    pub dimensions: Dimensions,
    pub customer_references: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DangerousGoods {
    pub content: Vec<DangerousGoodsContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DangerousGoodsContent {
    #[serde(rename = "ContentID")]
    pub content_id: String,
    #[serde(rename = "DryIceTotalNetQuantity")]
    pub dry_ice_total_net_quantity: String,
    #[serde(rename = "UNCode")]
    pub un_code: String,
}

impl ShipmentRequest {
    pub fn unit_of_measurement(&self) -> UnitSystem {
        self.requested_shipment.shipment_info.unit_of_measurement
    }

    pub fn packages(&self) -> &[RequestedPackage] {
        &self.requested_shipment.packages.requested_packages
    }

    /// Special services on the request; empty when the node is omitted
    pub fn special_services(&self) -> &[Service] {
        self.requested_shipment
            .shipment_info
            .special_services
            .as_ref()
            .map(|services| services.services.as_slice())
            .unwrap_or(&[])
    }
}
