use super::{
    DocumentImage, DryIce, ExportDeclaration, Insurance, LabelOptions, Money, Package, Party,
    SpecialService, Timestamp,
};
use serde::Serialize;

/// Shipment-level metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentDetails {
    /// Courier must be requested rather than arriving on a regular round
    pub unscheduled_pickup: bool,
    /// Incoterm, e.g. "DAP"
    pub terms_of_trade: Option<String>,
    /// "DOCUMENTS" or "NON_DOCUMENTS"
    pub content_type: Option<String>,
    pub ready_at: Timestamp,
    pub number_of_pieces: Option<u32>,
    pub description: Option<String>,
    /// Declared customs value with its currency
    pub declared_value: Option<Money>,
    /// Carrier product code
    pub service_type: Option<String>,
    pub special_pickup_instructions: Option<String>,
    /// Base64 encoded commercial invoice for paperless trade
    pub paperless_trade_image: Option<String>,
    pub transport_document: Option<DocumentImage>,
}

impl ShipmentDetails {
    pub fn new(ready_at: Timestamp) -> Self {
        Self {
            unscheduled_pickup: false,
            terms_of_trade: None,
            content_type: None,
            ready_at,
            number_of_pieces: None,
            description: None,
            declared_value: None,
            service_type: None,
            special_pickup_instructions: None,
            paperless_trade_image: None,
            transport_document: None,
        }
    }

    pub fn is_paperless_trade(&self) -> bool {
        self.paperless_trade_image
            .as_deref()
            .map_or(false, |image| !image.is_empty())
    }
}

/// A validated shipment booking request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentRequest {
    details: ShipmentDetails,
    payer_account_number: String,
    billing_account_number: Option<String>,
    shipper: Party,
    recipient: Party,
    buyer: Option<Party>,
    packages: Vec<Package>,
    insurance: Option<Insurance>,
    dry_ice: Option<DryIce>,
    label_options: Option<LabelOptions>,
    export_declaration: Option<ExportDeclaration>,
    special_services: Vec<SpecialService>,
}

impl ShipmentRequest {
    pub fn new(
        details: ShipmentDetails,
        payer_account_number: impl Into<String>,
        shipper: Party,
        recipient: Party,
        packages: Vec<Package>,
    ) -> Self {
        Self {
            details,
            payer_account_number: payer_account_number.into(),
            billing_account_number: None,
            shipper,
            recipient,
            buyer: None,
            packages,
            insurance: None,
            dry_ice: None,
            label_options: None,
            export_declaration: None,
            special_services: Vec::new(),
        }
    }

    pub fn with_billing_account_number(mut self, account_number: impl Into<String>) -> Self {
        let account_number = account_number.into();
        self.billing_account_number = Some(account_number).filter(|a| !a.is_empty());
        self
    }

    pub fn with_buyer(mut self, buyer: Party) -> Self {
        self.buyer = Some(buyer);
        self
    }

    pub fn with_insurance(mut self, insurance: Insurance) -> Self {
        self.insurance = Some(insurance);
        self
    }

    pub fn with_dry_ice(mut self, dry_ice: DryIce) -> Self {
        self.dry_ice = Some(dry_ice);
        self
    }

    pub fn with_label_options(mut self, label_options: LabelOptions) -> Self {
        self.label_options = Some(label_options);
        self
    }

    pub fn with_export_declaration(mut self, export_declaration: ExportDeclaration) -> Self {
        self.export_declaration = Some(export_declaration);
        self
    }

    pub fn with_special_services(mut self, services: Vec<SpecialService>) -> Self {
        self.special_services = services;
        self
    }

    pub fn details(&self) -> &ShipmentDetails {
        &self.details
    }

    pub fn payer_account_number(&self) -> &str {
        &self.payer_account_number
    }

    pub fn billing_account_number(&self) -> Option<&str> {
        self.billing_account_number.as_deref()
    }

    pub fn shipper(&self) -> &Party {
        &self.shipper
    }

    pub fn recipient(&self) -> &Party {
        &self.recipient
    }

    pub fn buyer(&self) -> Option<&Party> {
        self.buyer.as_ref()
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn insurance(&self) -> Option<&Insurance> {
        self.insurance.as_ref()
    }

    pub fn dry_ice(&self) -> Option<&DryIce> {
        self.dry_ice.as_ref()
    }

    pub fn label_options(&self) -> Option<&LabelOptions> {
        self.label_options.as_ref()
    }

    pub fn export_declaration(&self) -> Option<&ExportDeclaration> {
        self.export_declaration.as_ref()
    }

    pub fn special_services(&self) -> &[SpecialService] {
        &self.special_services
    }
}
