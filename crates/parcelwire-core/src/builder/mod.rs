//! Request builders
//!
//! Builders accumulate raw caller input across any number of setter calls
//! and defer all unit normalization and validation to `build()`. Setters take
//! `&mut self` and return `&mut Self`, so calls chain and one builder can be
//! reused for consecutive requests.
//!
//! Copyright (c) 2025 Parcelwire Team
//! Licensed under the Apache-2.0 license

mod rate;
mod shipment;
mod types;
mod validation;

pub use rate::RateRequestBuilder;
pub use shipment::ShipmentRequestBuilder;
pub use types::{PackageInput, PartyInput, RegistrationInput};

#[cfg(test)]
mod tests;
