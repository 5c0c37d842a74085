use super::common::{map_address, map_dimensions, special_services};
use crate::config::MapperConfig;
use crate::error::Result;
use crate::types::RateRequest;
use crate::units::resolve_unit_system;
use crate::wire::{self, rate as wire_rate};
use tracing::debug;

/// Maps a [`RateRequest`] to the rate service's request document
#[derive(Debug, Clone, Default)]
pub struct RateRequestMapper {
    config: MapperConfig,
}

impl RateRequestMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn map(&self, request: &RateRequest) -> Result<wire::RateRequest> {
        let unit_of_measurement = resolve_unit_system(request.packages())?;
        let details = request.details();

        let requested_packages = request
            .packages()
            .iter()
            .map(|package| wire_rate::RequestedPackage {
                number: package.sequence_number(),
                weight: wire_rate::PackageWeight {
                    value: package.weight().value,
                },
                dimensions: map_dimensions(package),
            })
            .collect();

        let services = special_services(request.special_services(), request.insurance());

        debug!(
            packages = request.packages().len(),
            services = services.len(),
            unit_system = %unit_of_measurement,
            "mapped rate request"
        );

        Ok(wire::RateRequest {
            requested_shipment: wire_rate::RequestedShipment {
                drop_off_type: wire::DropOffType::from_unscheduled_pickup(
                    details.unscheduled_pickup,
                ),
                next_business_day: details.next_business_day,
                ship_timestamp: details.ready_at,
                unit_of_measurement,
                content: details.content_type.clone(),
                declared_value: details.declared_value.as_ref().map(|money| money.amount),
                declared_value_currency_code: details
                    .declared_value
                    .as_ref()
                    .map(|money| money.currency_code.clone()),
                payment_info: details.terms_of_trade.clone(),
                account: request.payer_account_number().to_string(),
                ship: wire_rate::Ship {
                    shipper: map_address(request.shipper()),
                    recipient: map_address(request.recipient()),
                },
                packages: wire_rate::Packages { requested_packages },
                special_services: wire::SpecialServices { services },
            },
        })
    }
}
