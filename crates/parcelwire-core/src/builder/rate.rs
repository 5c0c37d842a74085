//! Accumulating builder for rate-quote requests

use super::types::{normalize_packages, PackageInput, PartyInput};
use super::validation::required;
use crate::error::{Error, Result};
use crate::types::{Insurance, Money, RateDetails, RateRequest, SpecialService, Timestamp};
use crate::units::resolve_unit_system;
use tracing::debug;

/// Collects rate inputs and assembles a [`RateRequest`]
///
/// Only the address part of the shipper and recipient is used; contact
/// details are ignored for quotes.
#[derive(Debug, Clone, Default)]
pub struct RateRequestBuilder {
    pub(super) unscheduled_pickup: bool,
    pub(super) terms_of_trade: Option<String>,
    pub(super) content_type: Option<String>,
    pub(super) ready_at: Option<Timestamp>,
    pub(super) declared_value: Option<Money>,
    pub(super) next_business_day: Option<bool>,
    pub(super) payer_account_number: Option<String>,
    pub(super) insurance: Option<Insurance>,
    pub(super) shipper: Option<PartyInput>,
    pub(super) recipient: Option<PartyInput>,
    pub(super) packages: Vec<PackageInput>,
    pub(super) special_services: Vec<SpecialService>,
}

impl RateRequestBuilder {
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

    pub fn set_declared_value(&mut self, amount: f64, currency_code: impl Into<String>) -> &mut Self {
        self.declared_value = Some(Money::new(amount, currency_code));
        self
    }

    pub fn set_next_business_day(&mut self, next_business_day: bool) -> &mut Self {
        self.next_business_day = Some(next_business_day);
        self
    }

    pub fn set_payer_account_number(&mut self, account_number: impl Into<String>) -> &mut Self {
        self.payer_account_number = Some(account_number.into());
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

    pub fn add_special_service(&mut self, service: SpecialService) -> &mut Self {
        self.special_services.push(service);
        self
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Normalize, validate and assemble; resets the builder only on success
    pub fn build(&mut self) -> Result<RateRequest> {
        let request = self.assemble()?;
        self.reset();
        Ok(request)
    }

    fn assemble(&self) -> Result<RateRequest> {
        let ready_at = *required(&self.ready_at, "ready_at")?;
        let payer_account_number = required(&self.payer_account_number, "payer_account_number")?;
        let shipper = required(&self.shipper, "shipper")?;
        let recipient = required(&self.recipient, "recipient")?;
        if self.packages.is_empty() {
            return Err(Error::missing("packages"));
        }

        let packages = normalize_packages(&self.packages)?;
        let unit_system = resolve_unit_system(&packages)?;

        let shipper = shipper.address().map_err(|e| e.within("shipper"))?;
        let recipient = recipient.address().map_err(|e| e.within("recipient"))?;

        let details = RateDetails {
            unscheduled_pickup: self.unscheduled_pickup,
            terms_of_trade: self.terms_of_trade.clone(),
            content_type: self.content_type.clone(),
            ready_at,
            declared_value: self.declared_value.clone(),
            next_business_day: self.next_business_day,
        };

        let mut request = RateRequest::new(
            details,
            payer_account_number.clone(),
            shipper,
            recipient,
            packages,
        )
        .with_special_services(self.special_services.clone());

        if let Some(insurance) = &self.insurance {
            request = request.with_insurance(insurance.clone());
        }

        debug!(
            packages = request.packages().len(),
            unit_system = %unit_system,
            "built rate request"
        );

        Ok(request)
    }
}
