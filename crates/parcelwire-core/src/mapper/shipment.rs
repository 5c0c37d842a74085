use super::common::{map_address, map_dimensions, special_services};
use crate::config::MapperConfig;
use crate::error::Result;
use crate::types::{DocumentImage, DryIce, LabelOptions, Party, ShipmentRequest};
use crate::units::resolve_unit_system;
use crate::wire::format::fixed_decimal;
use crate::wire::{self, shipment as wire_shipment};
use tracing::{debug, trace};

/// Decimal places the carrier expects on the dry ice net quantity
const DRY_ICE_QUANTITY_PLACES: usize = 2;

/// Maps a [`ShipmentRequest`] to the shipment service's request document
#[derive(Debug, Clone, Default)]
pub struct ShipmentRequestMapper {
    config: MapperConfig,
}

impl ShipmentRequestMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn map(&self, request: &ShipmentRequest) -> Result<wire::ShipmentRequest> {
        let unit_of_measurement = resolve_unit_system(request.packages())?;
        let details = request.details();

        let mut services = special_services(request.special_services(), request.insurance());
        let paperless = details.is_paperless_trade();
        if paperless {
            services.push(wire::Service::new(wire::SERVICE_TYPE_PAPERLESS_TRADE));
        }

        let shipment_info = wire_shipment::ShipmentInfo {
            drop_off_type: wire::DropOffType::from_unscheduled_pickup(details.unscheduled_pickup),
            service_type: details.service_type.clone(),
            billing: billing(request),
            special_services: (!services.is_empty())
                .then(|| wire::SpecialServices { services }),
            currency: details
                .declared_value
                .as_ref()
                .map(|money| money.currency_code.clone()),
            unit_of_measurement,
            label_type: request
                .label_options()
                .and_then(|options| options.label_type.clone()),
            paperless_trade_enabled: paperless.then_some(true),
            paperless_trade_image: details
                .paperless_trade_image
                .clone()
                .filter(|_| paperless),
            special_pickup_instructions: details.special_pickup_instructions.clone(),
            document_images: details.transport_document.as_ref().map(document_images),
            label_options: request.label_options().map(label_options),
        };

        let requested_packages: Vec<_> = request
            .packages()
            .iter()
            .map(|package| wire_shipment::RequestedPackage {
                number: package.sequence_number(),
                weight: package.weight().value,
                dimensions: map_dimensions(package),
                customer_references: package.customer_references().to_string(),
            })
            .collect();

        let international_detail = wire_shipment::InternationalDetail {
            commodities: wire_shipment::Commodities {
                number_of_pieces: Some(
                    details
                        .number_of_pieces
                        .unwrap_or(requested_packages.len() as u32),
                ),
                description: details.description.clone(),
                customs_value: details.declared_value.as_ref().map(|money| money.amount),
            },
            content: details.content_type.clone(),
            export_declaration: request.export_declaration().cloned(),
        };

        let ship = wire_shipment::Ship {
            shipper: contact_info(request.shipper(), true),
            recipient: contact_info(request.recipient(), true),
            buyer_contact_info: request.buyer().map(|buyer| contact_info(buyer, false)),
        };

        let dangerous_goods = request.dry_ice().map(|dry_ice| self.dangerous_goods(dry_ice));

        debug!(
            packages = requested_packages.len(),
            unit_system = %unit_of_measurement,
            paperless,
            dry_ice = dangerous_goods.is_some(),
            "mapped shipment request"
        );

        Ok(wire::ShipmentRequest {
            requested_shipment: wire_shipment::RequestedShipment {
                shipment_info,
                ship_timestamp: details.ready_at,
                payment_info: details.terms_of_trade.clone(),
                international_detail,
                ship,
                packages: wire_shipment::Packages { requested_packages },
                dangerous_goods,
            },
        })
    }

    fn dangerous_goods(&self, dry_ice: &DryIce) -> wire_shipment::DangerousGoods {
        trace!(un_code = %dry_ice.un_code, weight = dry_ice.weight, "declaring dry ice");
        wire_shipment::DangerousGoods {
            content: vec![wire_shipment::DangerousGoodsContent {
                content_id: self.config.dry_ice_content_id.clone(),
                dry_ice_total_net_quantity: fixed_decimal(dry_ice.weight, DRY_ICE_QUANTITY_PLACES),
                un_code: dry_ice.un_code.clone(),
            }],
        }
    }
}

fn billing(request: &ShipmentRequest) -> wire_shipment::Billing {
    let billing_account_number = request.billing_account_number().map(str::to_string);
    let shipping_payment_type = if billing_account_number.is_some() {
        wire::ShippingPaymentType::Receiver
    } else {
        wire::ShippingPaymentType::Shipper
    };

    wire_shipment::Billing {
        shipper_account_number: request.payer_account_number().to_string(),
        shipping_payment_type,
        billing_account_number,
    }
}

fn contact_info(party: &Party, with_registration: bool) -> wire_shipment::ContactInfo {
    let registration_numbers = (with_registration && !party.registration_numbers.is_empty())
        .then(|| wire_shipment::RegistrationNumbers {
            numbers: party
                .registration_numbers
                .iter()
                .map(|registration| wire_shipment::RegistrationNumber {
                    number: registration.number.clone(),
                    number_type_code: registration.type_code.clone(),
                    number_issuer_country_code: registration.issuer_country_code.clone(),
                })
                .collect(),
        });

    wire_shipment::ContactInfo {
        contact: wire_shipment::Contact {
            person_name: party.contact.name.clone(),
            company_name: party.contact.company.clone(),
            phone_number: party.contact.phone.clone(),
            email_address: party.contact.email.clone(),
        },
        address: map_address(&party.address),
        registration_numbers,
    }
}

fn document_images(document: &DocumentImage) -> wire_shipment::DocumentImages {
    wire_shipment::DocumentImages {
        images: vec![wire_shipment::DocumentImage {
            document_image: document.image.clone(),
            document_image_format: document.image_format.clone(),
            document_image_type: document.image_type.clone(),
        }],
    }
}

fn label_options(options: &LabelOptions) -> wire_shipment::LabelOptions {
    let invoice = options.customs_invoice.as_ref();

    wire_shipment::LabelOptions {
        request_waybill_document: options.waybill_document,
        request_customs_invoice: invoice.map(|_| true),
        customs_invoice_language_code: invoice.and_then(|i| i.language_code.clone()),
        customs_invoice_type: invoice.and_then(|i| i.invoice_type.clone()),
        request_shipment_receipt: options.shipment_receipt,
        customer_logo: options
            .customer_logo
            .as_ref()
            .map(|logo| wire_shipment::CustomerLogo {
                logo_image: logo.image.clone(),
                logo_image_format: logo.format.clone(),
            }),
        request_barcode_info: options.barcode_info,
        request_carrier_logo_on_label: options.carrier_logo_on_label,
    }
}
