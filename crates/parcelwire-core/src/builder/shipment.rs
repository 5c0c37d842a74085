//! Accumulating builder for shipment booking requests

use super::types::{normalize_packages, PackageInput, PartyInput, RegistrationInput};
use super::validation::required;
use crate::error::{Error, Result};
use crate::types::{
    CustomerLogo, CustomsInvoice, DocumentImage, DryIce, ExportDeclaration, Insurance,
    LabelOptions, Money, ShipmentDetails, ShipmentRequest, SpecialService, Timestamp,
};
use crate::units::resolve_unit_system;
use serde_json::Value;
use tracing::debug;

/// Collects shipment inputs across many calls and assembles a
/// [`ShipmentRequest`] on [`build`](Self::build)
///
/// Required before building: ready timestamp, payer account number,
/// shipper, recipient and at least one package.
///
/// # Examples
///
/// ```
/// use parcelwire_core::builder::{PartyInput, ShipmentRequestBuilder};
///
/// let ready_at = chrono::DateTime::parse_from_rfc3339("2025-03-14T10:00:00+01:00").unwrap();
/// let shipper = PartyInput::new("DE", "10115", "Berlin", vec!["Main Street 1".into()])
///     .with_contact("Ada Lovelace", "Engines Ltd", "+49 30 0000");
/// let recipient = PartyInput::new("US", "10001", "New York", vec!["Broadway 1".into()])
///     .with_contact("Charles Babbage", "Difference Inc", "+1 212 0000");
///
/// let request = ShipmentRequestBuilder::new()
///     .set_ready_at(ready_at)
///     .set_payer_account_number("123456789")
///     .set_shipper(shipper)
///     .set_recipient(recipient)
///     .add_package(2.5, "kg", 10.0, 10.0, 10.0, "cm", "order-1")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.packages().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShipmentRequestBuilder {
    pub(super) unscheduled_pickup: bool,
    pub(super) terms_of_trade: Option<String>,
    pub(super) content_type: Option<String>,
    pub(super) ready_at: Option<Timestamp>,
    pub(super) number_of_pieces: Option<u32>,
    pub(super) description: Option<String>,
    pub(super) declared_value: Option<Money>,
    pub(super) service_type: Option<String>,
    pub(super) special_pickup_instructions: Option<String>,
    pub(super) payer_account_number: Option<String>,
    pub(super) billing_account_number: Option<String>,
    pub(super) insurance: Option<Insurance>,
    pub(super) shipper: Option<PartyInput>,
    pub(super) recipient: Option<PartyInput>,
    pub(super) buyer: Option<PartyInput>,
    pub(super) shipper_registrations: Vec<RegistrationInput>,
    pub(super) recipient_registrations: Vec<RegistrationInput>,
    pub(super) packages: Vec<PackageInput>,
    pub(super) dry_ice: Option<DryIce>,
    pub(super) label_options: Option<LabelOptions>,
    pub(super) paperless_trade_image: Option<String>,
    pub(super) transport_document: Option<DocumentImage>,
    pub(super) export_declaration: Option<Value>,
    pub(super) special_services: Vec<SpecialService>,
}

impl ShipmentRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unscheduled_pickup(&mut self, unscheduled_pickup: bool) -> &mut Self {
        self.unscheduled_pickup = unscheduled_pickup;
        self
    }

    pub fn set_terms_of_trade(&mut self, terms_of_trade: impl Into<String>) -> &mut Self {
        self.terms_of_trade = Some(terms_of_trade.into());
        self
    }

    pub fn set_content_type(&mut self, content_type: impl Into<String>) -> &mut Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn set_ready_at(&mut self, ready_at: Timestamp) -> &mut Self {
        self.ready_at = Some(ready_at);
        self
    }

    /// Pieces declared on the commodities; defaults to the package count
    pub fn set_number_of_pieces(&mut self, number_of_pieces: u32) -> &mut Self {
        self.number_of_pieces = Some(number_of_pieces);
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Declared customs value and its currency
    pub fn set_declared_value(&mut self, amount: f64, currency_code: impl Into<String>) -> &mut Self {
        self.declared_value = Some(Money::new(amount, currency_code));
        self
    }

    pub fn set_service_type(&mut self, service_type: impl Into<String>) -> &mut Self {
        self.service_type = Some(service_type.into());
        self
    }

    pub fn set_special_pickup_instructions(&mut self, instructions: impl Into<String>) -> &mut Self {
        self.special_pickup_instructions = Some(instructions.into());
        self
    }

    pub fn set_payer_account_number(&mut self, account_number: impl Into<String>) -> &mut Self {
        self.payer_account_number = Some(account_number.into());
        self
    }

    /// Third-party or receiver account; switches the payment type to receiver
    pub fn set_billing_account_number(&mut self, account_number: impl Into<String>) -> &mut Self {
        self.billing_account_number = Some(account_number.into());
        self
    }

    pub fn set_insurance(&mut self, value: f64, currency_code: impl Into<String>) -> &mut Self {
        self.insurance = Some(Insurance::new(value, currency_code));
        self
    }

    pub fn set_shipper(&mut self, shipper: PartyInput) -> &mut Self {
        self.shipper = Some(shipper);
        self
    }

    pub fn set_recipient(&mut self, recipient: PartyInput) -> &mut Self {
        self.recipient = Some(recipient);
        self
    }

    pub fn set_buyer(&mut self, buyer: PartyInput) -> &mut Self {
        self.buyer = Some(buyer);
        self
    }

    pub fn add_shipper_registration_number(
        &mut self,
        number: impl Into<String>,
        type_code: impl Into<String>,
        issuer_country_code: Option<String>,
    ) -> &mut Self {
        self.shipper_registrations.push(RegistrationInput {
            number: number.into(),
            type_code: type_code.into(),
            issuer_country_code,
        });
        self
    }

    pub fn add_recipient_registration_number(
        &mut self,
        number: impl Into<String>,
        type_code: impl Into<String>,
        issuer_country_code: Option<String>,
    ) -> &mut Self {
        self.recipient_registrations.push(RegistrationInput {
            number: number.into(),
            type_code: type_code.into(),
            issuer_country_code,
        });
        self
    }

    /// Append a package; its sequence number is its position, starting at one
    #[allow(clippy::too_many_arguments)]
    pub fn add_package(
        &mut self,
        weight: f64,
        weight_unit: impl Into<String>,
        length: f64,
        width: f64,
        height: f64,
        dimension_unit: impl Into<String>,
        customer_references: impl Into<String>,
    ) -> &mut Self {
        self.packages.push(PackageInput {
            weight,
            weight_unit: weight_unit.into(),
            length,
            width,
            height,
            dimension_unit: dimension_unit.into(),
            customer_references: customer_references.into(),
        });
        self
    }

    pub fn set_dry_ice(&mut self, un_code: impl Into<String>, weight: f64) -> &mut Self {
        self.dry_ice = Some(DryIce::new(un_code, weight));
        self
    }

    fn label_options_mut(&mut self) -> &mut LabelOptions {
        self.label_options.get_or_insert_with(LabelOptions::default)
    }

    pub fn set_waybill_document_requested(&mut self, requested: bool) -> &mut Self {
        self.label_options_mut().waybill_document = requested;
        self
    }

    /// Request a customs invoice; type and language are dropped when not requested
    pub fn set_customs_invoice_requested(
        &mut self,
        requested: bool,
        invoice_type: Option<String>,
        language_code: Option<String>,
    ) -> &mut Self {
        self.label_options_mut().customs_invoice = requested.then(|| CustomsInvoice {
            invoice_type,
            language_code,
        });
        self
    }

    pub fn set_shipment_receipt_requested(&mut self, requested: bool) -> &mut Self {
        self.label_options_mut().shipment_receipt = requested;
        self
    }

    pub fn set_barcode_info_requested(&mut self, requested: bool) -> &mut Self {
        self.label_options_mut().barcode_info = requested;
        self
    }

    pub fn set_carrier_logo_requested(&mut self, requested: bool) -> &mut Self {
        self.label_options_mut().carrier_logo_on_label = requested;
        self
    }

    pub fn set_customer_logo(&mut self, image: impl Into<String>, format: impl Into<String>) -> &mut Self {
        self.label_options_mut().customer_logo = Some(CustomerLogo {
            image: image.into(),
            format: format.into(),
        });
        self
    }

    pub fn set_label_type(&mut self, label_type: impl Into<String>) -> &mut Self {
        self.label_options_mut().label_type = Some(label_type.into());
        self
    }

    /// Attach an encoded trade document, enabling paperless trade
    pub fn set_paperless_document(&mut self, image: impl Into<String>) -> &mut Self {
        self.paperless_trade_image = Some(image.into());
        self
    }

    pub fn set_transport_document(
        &mut self,
        image: impl Into<String>,
        image_format: impl Into<String>,
        image_type: impl Into<String>,
    ) -> &mut Self {
        self.transport_document = Some(DocumentImage {
            image: image.into(),
            image_format: image_format.into(),
            image_type: image_type.into(),
        });
        self
    }

    /// Export declaration passed through to the carrier; must be a JSON object
    pub fn set_export_declaration(&mut self, declaration: Value) -> &mut Self {
        self.export_declaration = Some(declaration);
        self
    }

    pub fn add_special_service(&mut self, service: SpecialService) -> &mut Self {
        self.special_services.push(service);
        self
    }

    /// Discard everything accumulated so far
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Normalize, validate and assemble the request
    ///
    /// On success the builder is reset and can be reused. On failure the
    /// accumulated inputs are left untouched so the caller can correct them
    /// and retry.
    pub fn build(&mut self) -> Result<ShipmentRequest> {
        let request = self.assemble()?;
        self.reset();
        Ok(request)
    }

    fn assemble(&self) -> Result<ShipmentRequest> {
        let ready_at = *required(&self.ready_at, "ready_at")?;
        let payer_account_number = required(&self.payer_account_number, "payer_account_number")?;
        let shipper_input = required(&self.shipper, "shipper")?;
        let recipient_input = required(&self.recipient, "recipient")?;
        if self.packages.is_empty() {
            return Err(Error::missing("packages"));
        }

        let packages = normalize_packages(&self.packages)?;
        let unit_system = resolve_unit_system(&packages)?;

        let mut shipper_input = shipper_input.clone();
        shipper_input.registration_numbers.extend(self.shipper_registrations.iter().cloned());
        let mut recipient_input = recipient_input.clone();
        recipient_input
            .registration_numbers
            .extend(self.recipient_registrations.iter().cloned());

        let shipper = shipper_input.to_party("shipper")?;
        let recipient = recipient_input.to_party("recipient")?;
        let buyer = self
            .buyer
            .as_ref()
            .map(|buyer| buyer.to_party("buyer"))
            .transpose()?;
        let export_declaration = self
            .export_declaration
            .clone()
            .map(ExportDeclaration::try_from)
            .transpose()?;

        let details = ShipmentDetails {
            unscheduled_pickup: self.unscheduled_pickup,
            terms_of_trade: self.terms_of_trade.clone(),
            content_type: self.content_type.clone(),
            ready_at,
            number_of_pieces: Some(self.number_of_pieces.unwrap_or(packages.len() as u32)),
            description: self.description.clone(),
            declared_value: self.declared_value.clone(),
            service_type: self.service_type.clone(),
            special_pickup_instructions: self.special_pickup_instructions.clone(),
            paperless_trade_image: self.paperless_trade_image.clone(),
            transport_document: self.transport_document.clone(),
        };

        let mut request = ShipmentRequest::new(
            details,
            payer_account_number.clone(),
            shipper,
            recipient,
            packages,
        )
        .with_special_services(self.special_services.clone());

        if let Some(account) = &self.billing_account_number {
            request = request.with_billing_account_number(account.clone());
        }
        if let Some(buyer) = buyer {
            request = request.with_buyer(buyer);
        }
        if let Some(insurance) = &self.insurance {
            request = request.with_insurance(insurance.clone());
        }
        if let Some(dry_ice) = &self.dry_ice {
            request = request.with_dry_ice(dry_ice.clone());
        }
        if let Some(label_options) = &self.label_options {
            request = request.with_label_options(label_options.clone());
        }
        if let Some(declaration) = export_declaration {
            request = request.with_export_declaration(declaration);
        }

        debug!(
            packages = request.packages().len(),
            unit_system = %unit_system,
            "built shipment request"
        );

        Ok(request)
    }
}
