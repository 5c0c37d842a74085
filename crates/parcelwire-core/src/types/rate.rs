use super::{Address, Insurance, Money, Package, SpecialService, Timestamp};
use serde::Serialize;

/// Rate-quote metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateDetails {
    pub unscheduled_pickup: bool,
    pub terms_of_trade: Option<String>,
    pub content_type: Option<String>,
    pub ready_at: Timestamp,
    /// Declared value with its currency
    pub declared_value: Option<Money>,
    /// Quote the next business day when no product is available on `ready_at`
    pub next_business_day: Option<bool>,
}

impl RateDetails {
    pub fn new(ready_at: Timestamp) -> Self {
        Self {
            unscheduled_pickup: false,
            terms_of_trade: None,
            content_type: None,
            ready_at,
            declared_value: None,
            next_business_day: None,
        }
    }
}

/// A validated rate-quote request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateRequest {
    details: RateDetails,
    payer_account_number: String,
    shipper: Address,
    recipient: Address,
    packages: Vec<Package>,
    insurance: Option<Insurance>,
    special_services: Vec<SpecialService>,
}

impl RateRequest {
    pub fn new(
        details: RateDetails,
        payer_account_number: impl Into<String>,
        shipper: Address,
        recipient: Address,
        packages: Vec<Package>,
    ) -> Self {
        Self {
            details,
            payer_account_number: payer_account_number.into(),
            shipper,
            recipient,
            packages,
            insurance: None,
            special_services: Vec::new(),
        }
    }

    pub fn with_insurance(mut self, insurance: Insurance) -> Self {
        self.insurance = Some(insurance);
        self
    }

    pub fn with_special_services(mut self, services: Vec<SpecialService>) -> Self {
        self.special_services = services;
        self
    }

    pub fn details(&self) -> &RateDetails {
        &self.details
    }

    pub fn payer_account_number(&self) -> &str {
        &self.payer_account_number
    }

    pub fn shipper(&self) -> &Address {
        &self.shipper
    }

    pub fn recipient(&self) -> &Address {
        &self.recipient
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn insurance(&self) -> Option<&Insurance> {
        self.insurance.as_ref()
    }

    pub fn special_services(&self) -> &[SpecialService] {
        &self.special_services
    }
}
