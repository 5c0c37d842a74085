//! Parcelwire Core - request builders and wire mappers for express parcel carriers
//!
//! This crate turns loosely supplied shipping data into validated rate and
//! shipment requests, and projects those requests onto the carrier's wire
//! schema.
//!
//! # Main Components
//!
//! - **Builders**: accumulate caller input and assemble immutable requests
//! - **Units**: normalize weights and dimensions into the metric or imperial system
//! - **Mappers**: produce the nested wire documents the carrier expects
//! - **Services**: hand mapped documents to a pluggable [`Transport`]
//!
//! # Example
//!
//! ```
//! use parcelwire_core::{map_shipment_request, PartyInput, Result, ShipmentRequestBuilder};
//!
//! fn example() -> Result<()> {
//!     let ready_at = chrono::DateTime::parse_from_rfc3339("2025-03-14T10:00:00+01:00")
//!         .expect("valid timestamp");
//!
//!     let request = ShipmentRequestBuilder::new()
//!         .set_ready_at(ready_at)
//!         .set_payer_account_number("123456789")
//!         .set_shipper(
//!             PartyInput::new("DE", "10115", "Berlin", vec!["Main Street 1".into()])
//!                 .with_contact("Ada Lovelace", "Engines Ltd", "+49 30 0000"),
//!         )
//!         .set_recipient(
//!             PartyInput::new("US", "10001", "New York", vec!["Broadway 1".into()])
//!                 .with_contact("Charles Babbage", "Difference Inc", "+1 212 0000"),
//!         )
//!         .add_package(2.5, "KG", 10.0, 10.0, 10.0, "CM", "order-1")
//!         .set_insurance(100.0, "USD")
//!         .build()?;
//!
//!     let wire = map_shipment_request(&request)?;
//!     assert_eq!(wire.special_services().len(), 1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod mapper;
pub mod service;
pub mod types;
pub mod units;
pub mod wire;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use builder::{PartyInput, RateRequestBuilder, ShipmentRequestBuilder};
pub use config::MapperConfig;
pub use error::{Error, Quantity, Result};
pub use mapper::{RateRequestMapper, ShipmentRequestMapper};
pub use service::{RateService, ShipmentService, Transport};
pub use types::{
    Address, Contact, Package, Party, RateDetails, RateRequest, ShipmentDetails,
    ShipmentRequest, SpecialService,
};
pub use units::{DimensionUnit, UnitSystem, WeightUnit};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Map a rate request with the default configuration
pub fn map_rate_request(request: &RateRequest) -> Result<wire::RateRequest> {
    RateRequestMapper::new().map(request)
}

/// Map a shipment request with the default configuration
pub fn map_shipment_request(request: &ShipmentRequest) -> Result<wire::ShipmentRequest> {
    ShipmentRequestMapper::new().map(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_error_display() {
        let err = Error::MissingRequiredField {
            field: "shipper".to_string(),
        };
        assert!(err.to_string().contains("shipper"));
    }
}
