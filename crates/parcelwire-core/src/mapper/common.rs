//! Mapping steps shared by the rate and shipment mappers

use crate::types::{Address, Insurance, Package, SpecialService};
use crate::wire;

pub(super) fn map_address(address: &Address) -> wire::Address {
    wire::Address {
        street_lines: address.primary_street_line().to_string(),
        street_lines2: address.street_line(1).map(str::to_string),
        street_lines3: address.street_line(2).map(str::to_string),
        city: address.city().to_string(),
        postal_code: address.postal_code().to_string(),
        country_code: address.country_code().to_string(),
    }
}

pub(super) fn map_dimensions(package: &Package) -> wire::Dimensions {
    let dimensions = package.dimensions();
    wire::Dimensions {
        length: dimensions.length,
        width: dimensions.width,
        height: dimensions.height,
    }
}

pub(super) fn map_special_service(service: &SpecialService) -> wire::Service {
    wire::Service {
        service_type: service.service_type.clone(),
        service_value: service.service_value,
        currency_code: service.currency_code.clone(),
    }
}

pub(super) fn insurance_service(insurance: &Insurance) -> wire::Service {
    wire::Service {
        service_type: wire::SERVICE_TYPE_INSURANCE.to_string(),
        service_value: Some(insurance.value),
        currency_code: Some(insurance.currency_code.clone()),
    }
}

/// Caller-supplied services first, then insurance when present
pub(super) fn special_services(
    requested: &[SpecialService],
    insurance: Option<&Insurance>,
) -> Vec<wire::Service> {
    requested
        .iter()
        .map(map_special_service)
        .chain(insurance.map(insurance_service))
        .collect()
}
