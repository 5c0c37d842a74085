//! Domain entities for rate and shipment requests
//!
//! These are the validated, caller-facing value objects the builders produce
//! and the mappers consume. They are independent of the carrier's wire
//! schema, which lives in [`crate::wire`].

mod options;
mod package;
mod party;
mod rate;
mod shipment;

pub use options::{
    CustomerLogo, CustomsInvoice, DocumentImage, DryIce, ExportDeclaration, Insurance,
    LabelOptions, Money, SpecialService,
};
pub use package::Package;
pub use party::{Address, Contact, Party, RegistrationNumber, MAX_STREET_LINES};
pub use rate::{RateDetails, RateRequest};
pub use shipment::{ShipmentDetails, ShipmentRequest};

/// Timestamp type used for ready-at times
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;
