//! Optional request concepts: insurance, dangerous goods, documents and label preferences
//!
//! Copyright (c) 2025 Parcelwire Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// An amount in a currency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Money {
    pub amount: f64,
    pub currency_code: String,
}

impl Money {
    pub fn new(amount: f64, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
        }
    }
}

/// Declared insured value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insurance {
    pub value: f64,
    pub currency_code: String,
}

impl Insurance {
    pub fn new(value: f64, currency_code: impl Into<String>) -> Self {
        Self {
            value,
            currency_code: currency_code.into(),
        }
    }
}

/// Dry ice carried in the shipment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DryIce {
    /// UN number, e.g. "UN1845"
    pub un_code: String,
    /// Net dry ice weight, in the shipment's weight unit
    pub weight: f64,
}

impl DryIce {
    pub fn new(un_code: impl Into<String>, weight: f64) -> Self {
        Self {
            un_code: un_code.into(),
            weight,
        }
    }
}

/// Customs invoice generated by the carrier
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomsInvoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

/// Logo printed on the label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerLogo {
    /// Base64 encoded image
    pub image: String,
    /// Image format, e.g. "PNG"
    pub format: String,
}

/// Output document preferences
///
/// A customs invoice is requested exactly when `customs_invoice` is `Some`,
/// so its type and language cannot be set without the request itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LabelOptions {
    pub waybill_document: bool,
    pub customs_invoice: Option<CustomsInvoice>,
    pub shipment_receipt: bool,
    pub barcode_info: bool,
    pub carrier_logo_on_label: bool,
    pub customer_logo: Option<CustomerLogo>,
    pub label_type: Option<String>,
}

impl LabelOptions {
    pub fn customs_invoice_requested(&self) -> bool {
        self.customs_invoice.is_some()
    }
}

/// Export declaration, carried to the wire unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExportDeclaration(Map<String, Value>);

impl ExportDeclaration {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Value> for ExportDeclaration {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(Error::invalid(
                "export_declaration",
                format!("expected a JSON object, got {}", other),
            )),
        }
    }
}

/// A value-added service requested by the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialService {
    /// Carrier service code, e.g. "II" for insurance
    pub service_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

impl SpecialService {
    pub fn new(service_type: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
            service_value: None,
            currency_code: None,
        }
    }

    pub fn with_value(mut self, value: f64, currency_code: impl Into<String>) -> Self {
        self.service_value = Some(value);
        self.currency_code = Some(currency_code.into());
        self
    }
}

/// An encoded document image attached to the shipment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentImage {
    pub image: String,
    pub image_format: String,
    pub image_type: String,
}
