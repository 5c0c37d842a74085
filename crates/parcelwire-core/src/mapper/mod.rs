//! Projection of domain requests onto the carrier's wire schema
//!
//! The mappers are stateless apart from their [`MapperConfig`]. They borrow a
//! finished [`crate::types::RateRequest`] or [`crate::types::ShipmentRequest`],
//! re-derive the unit system from its packages and emit a fresh wire graph.
//! Mapping the same input twice yields equal output.
//!
//! Copyright (c) 2025 Parcelwire Team
//! Licensed under the Apache-2.0 license

mod common;
mod rate;
mod shipment;


pub use rate::RateRequestMapper;
pub use shipment::ShipmentRequestMapper;
