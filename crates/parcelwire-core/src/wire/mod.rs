//! Wire schema of the carrier's rate and shipment services
//!
//! These are passive structures shaped exactly like the remote service's
//! request documents. Only the mappers in [`crate::mapper`] build them; the
//! transport collaborator serializes them with `serde` using the service's
//! own tag names.
//!
//! Copyright (c) 2025 Parcelwire Team
//! Licensed under the Apache-2.0 license

pub mod common;
pub mod format;
pub mod rate;
pub mod shipment;

pub use common::{
    Address, Dimensions, DropOffType, Service, SpecialServices, SERVICE_TYPE_INSURANCE,
    SERVICE_TYPE_PAPERLESS_TRADE,
};
pub use rate::RateRequest;
pub use shipment::{ShipmentRequest, ShippingPaymentType};
