//! Tests for the request builders

use super::*;
use crate::error::{Error, Quantity};
use crate::types::{SpecialService, Timestamp};
use crate::units::{DimensionUnit, WeightUnit};
use serde_json::json;

fn ready_at() -> Timestamp {
    chrono::DateTime::parse_from_rfc3339("2025-03-14T10:00:00+01:00").unwrap()
}

fn party(country_code: &str) -> PartyInput {
    PartyInput::new(country_code, "10115", "Berlin", vec!["Main Street 1".to_string()])
        .with_contact("Ada Lovelace", "Engines Ltd", "+49 30 0000")
}

fn complete_shipment() -> ShipmentRequestBuilder {
    let mut builder = ShipmentRequestBuilder::new();
    builder
        .set_ready_at(ready_at())
        .set_payer_account_number("123456789")
        .set_shipper(party("DE"))
        .set_recipient(party("US"))
        .add_package(2.5, "KG", 10.0, 10.0, 10.0, "CM", "order-1");
    builder
}

fn complete_rate() -> RateRequestBuilder {
    let mut builder = RateRequestBuilder::new();
    builder
        .set_ready_at(ready_at())
        .set_payer_account_number("123456789")
        .set_shipper(party("DE"))
        .set_recipient(party("US"))
        .add_package(5.0, "lb", 12.0, 8.0, 4.0, "in", "");
    builder
}

#[test]
fn test_new_builder_reports_all_missing_fields() {
    let builder = ShipmentRequestBuilder::new();
    assert_eq!(
        builder.missing_fields(),
        vec!["ready_at", "payer_account_number", "shipper", "recipient", "packages"]
    );
    assert!(!builder.is_complete());
    assert!(complete_shipment().is_complete());
}

#[test]
fn test_build_fails_on_first_missing_field() {
    let mut builder = ShipmentRequestBuilder::new();
    builder.set_ready_at(ready_at());

    let err = builder.build().unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField { ref field } if field == "payer_account_number"));
}

#[test]
fn test_build_without_packages() {
    let mut builder = ShipmentRequestBuilder::new();
    builder
        .set_ready_at(ready_at())
        .set_payer_account_number("123456789")
        .set_shipper(party("DE"))
        .set_recipient(party("US"));

    let err = builder.build().unwrap_err();
    assert_eq!(err.field(), Some("packages"));
}

#[test]
fn test_minimal_shipment() {
    let request = complete_shipment().build().unwrap();

    assert_eq!(request.packages().len(), 1);
    let package = &request.packages()[0];
    assert_eq!(package.sequence_number(), 1);
    assert_eq!(package.weight().value, 2.5);
    assert_eq!(package.weight().unit, WeightUnit::Kg);
    assert_eq!(package.dimensions().unit, DimensionUnit::Cm);
    assert!(request.special_services().is_empty());
    assert!(request.insurance().is_none());
    assert!(request.label_options().is_none());
    assert_eq!(request.details().number_of_pieces, Some(1));
}

#[test]
fn test_packages_are_normalized() {
    let mut builder = complete_shipment();
    builder.add_package(500.0, "g", 1000.0, 500.0, 250.0, "mm", "order-2");

    let request = builder.build().unwrap();
    let second = &request.packages()[1];
    assert_eq!(second.sequence_number(), 2);
    assert_eq!(second.weight().value, 0.5);
    assert_eq!(second.dimensions().length, 100.0);
    assert_eq!(second.dimensions().height, 25.0);
}

#[test]
fn test_mixed_units_fail_and_keep_accumulator() {
    let mut builder = complete_shipment();
    builder.add_package(16.0, "OZ", 12.0, 12.0, 12.0, "IN", "order-2");

    let err = builder.build().unwrap_err();
    match err {
        Error::InconsistentUnit { quantity, sequence_number, .. } => {
            assert_eq!(quantity, Quantity::Weight);
            assert_eq!(sequence_number, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // Inputs survive the failed attempt
    assert!(builder.is_complete());
    assert_eq!(builder.packages.len(), 2);
}

#[test]
fn test_invalid_unit_code() {
    let mut builder = complete_shipment();
    builder.add_package(1.0, "KG", 1.0, 1.0, 1.0, "furlong", "");

    let err = builder.build().unwrap_err();
    assert!(matches!(err, Error::InvalidUnit { quantity: Quantity::Dimension, .. }));
}

#[test]
fn test_successful_build_resets_builder() {
    let mut builder = complete_shipment();
    builder.build().unwrap();

    assert_eq!(builder.missing_fields().len(), 5);
    assert!(matches!(builder.build(), Err(Error::MissingRequiredField { .. })));
}

#[test]
fn test_explicit_reset() {
    let mut builder = complete_rate();
    builder.reset();
    assert!(!builder.is_complete());
}

#[test]
fn test_optional_sections_are_attached() {
    let mut builder = complete_shipment();
    builder
        .set_billing_account_number("987654321")
        .set_buyer(party("FR"))
        .set_insurance(100.0, "USD")
        .set_dry_ice("UN1845", 3.0)
        .set_waybill_document_requested(true)
        .set_customs_invoice_requested(true, Some("COMMERCIAL_INVOICE".into()), Some("en".into()))
        .set_label_type("PDF")
        .set_paperless_document("base64-invoice")
        .set_transport_document("base64-awb", "PDF", "CIN")
        .set_export_declaration(json!({"ExportReason": "SALE"}))
        .add_special_service(SpecialService::new("PT"))
        .add_shipper_registration_number("DE123", "VAT", None)
        .set_number_of_pieces(3)
        .set_declared_value(100.0, "USD");

    let request = builder.build().unwrap();
    assert_eq!(request.billing_account_number(), Some("987654321"));
    assert_eq!(request.buyer().unwrap().address.country_code(), "FR");
    assert_eq!(request.insurance().unwrap().value, 100.0);
    assert_eq!(request.dry_ice().unwrap().un_code, "UN1845");
    let labels = request.label_options().unwrap();
    assert!(labels.waybill_document);
    assert!(labels.customs_invoice_requested());
    assert_eq!(labels.label_type.as_deref(), Some("PDF"));
    assert!(request.details().is_paperless_trade());
    assert_eq!(request.details().transport_document.as_ref().unwrap().image_type, "CIN");
    assert_eq!(request.details().number_of_pieces, Some(3));
    assert_eq!(request.special_services().len(), 1);
    assert_eq!(request.export_declaration().unwrap().fields()["ExportReason"], json!("SALE"));
    assert_eq!(request.shipper().registration_numbers[0].issuer_country_code, "DE");
}

#[test]
fn test_customs_invoice_not_requested_drops_details() {
    let mut builder = complete_shipment();
    builder.set_customs_invoice_requested(false, Some("PROFORMA".into()), Some("de".into()));

    let request = builder.build().unwrap();
    assert!(!request.label_options().unwrap().customs_invoice_requested());
}

#[test]
fn test_export_declaration_must_be_object() {
    let mut builder = complete_shipment();
    builder.set_export_declaration(json!(["not", "an", "object"]));

    let err = builder.build().unwrap_err();
    assert_eq!(err.field(), Some("export_declaration"));
}

#[test]
fn test_party_errors_are_qualified() {
    let mut builder = complete_shipment();
    builder.set_buyer(PartyInput::new("FR", "75001", "Paris", vec![" ".to_string()]));

    let err = builder.build().unwrap_err();
    assert!(matches!(err, Error::InvalidField { .. }));
    assert_eq!(err.field(), Some("buyer.street_lines"));
}

#[test]
fn test_minimal_rate() {
    let request = complete_rate().build().unwrap();
    assert_eq!(request.packages()[0].weight().unit, WeightUnit::Lb);
    assert_eq!(request.shipper().country_code(), "DE");
    assert!(request.details().next_business_day.is_none());
}

#[test]
fn test_rate_options() {
    let mut builder = complete_rate();
    builder
        .set_unscheduled_pickup(true)
        .set_next_business_day(false)
        .set_terms_of_trade("DDP")
        .set_insurance(20.0, "USD")
        .add_special_service(SpecialService::new("PT").with_value(5.0, "USD"));

    let request = builder.build().unwrap();
    assert!(request.details().unscheduled_pickup);
    assert_eq!(request.details().next_business_day, Some(false));
    assert_eq!(request.details().terms_of_trade.as_deref(), Some("DDP"));
    assert_eq!(request.insurance().unwrap().currency_code, "USD");
    assert_eq!(request.special_services()[0].service_value, Some(5.0));
}

#[test]
fn test_blank_country_code_is_rejected_by_both_builders() {
    let blank_country = || PartyInput::new("", "10115", "Berlin", vec!["Main Street 1".to_string()]);

    let mut rate = complete_rate();
    rate.set_shipper(blank_country());
    let err = rate.build().unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField { .. }));
    assert_eq!(err.field(), Some("shipper.country_code"));

    let mut shipment = complete_shipment();
    shipment.set_shipper(blank_country());
    let err = shipment.build().unwrap_err();
    assert_eq!(err.field(), Some("shipper.country_code"));
}

#[test]
fn test_rate_missing_recipient() {
    let mut builder = RateRequestBuilder::new();
    builder
        .set_ready_at(ready_at())
        .set_payer_account_number("123456789")
        .set_shipper(party("DE"));

    assert_eq!(builder.missing_fields(), vec!["recipient", "packages"]);
    let err = builder.build().unwrap_err();
    assert_eq!(err.field(), Some("recipient"));
}
