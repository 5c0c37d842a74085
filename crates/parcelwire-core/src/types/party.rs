//! Addresses and the parties that own them
//!
//! Copyright (c) 2025 Parcelwire Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde::Serialize;

/// Street lines the carrier can carry per address
pub const MAX_STREET_LINES: usize = 3;

/// A postal location
///
/// The first street line is always present and non-empty. Lines two and
/// three are kept as supplied, blank ones included; the mapper decides
/// whether to emit them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    country_code: String,
    postal_code: String,
    city: String,
    street_lines: Vec<String>,
}

impl Address {
    pub fn new(
        country_code: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        street_lines: Vec<String>,
    ) -> Result<Self> {
        let country_code = country_code.into();
        if country_code.trim().is_empty() {
            return Err(Error::missing("country_code"));
        }

        let mut street_lines = street_lines;

        match street_lines.first() {
            None => return Err(Error::missing("street_lines")),
            Some(first) if first.trim().is_empty() => {
                return Err(Error::invalid("street_lines", "first street line cannot be empty"));
            }
            Some(_) => {}
        }

        if street_lines.len() > MAX_STREET_LINES {
            log::warn!(
                "Address has {} street lines, only the first {} are kept",
                street_lines.len(),
                MAX_STREET_LINES
            );
            street_lines.truncate(MAX_STREET_LINES);
        }

        Ok(Self {
            country_code,
            postal_code: postal_code.into(),
            city: city.into(),
            street_lines,
        })
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn street_lines(&self) -> &[String] {
        &self.street_lines
    }

    /// The mandatory first street line
    pub fn primary_street_line(&self) -> &str {
        // Non-empty by construction
        self.street_lines.first().map(String::as_str).unwrap_or_default()
    }

    /// Street line `index` (zero-based) if it exists and is not blank
    pub fn street_line(&self, index: usize) -> Option<&str> {
        self.street_lines
            .get(index)
            .map(String::as_str)
            .filter(|line| !line.trim().is_empty())
    }
}

/// How to reach a party
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub name: String,
    pub company: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Contact {
    pub fn new(name: impl Into<String>, company: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
            phone: phone.into(),
            email: None,
        }
    }

    /// Set the email address; blank addresses are dropped here and never reach the wire
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email.filter(|e| !e.trim().is_empty());
        self
    }
}

/// Tax or customs registration of a party (VAT, EORI, ...)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationNumber {
    pub number: String,
    pub type_code: String,
    pub issuer_country_code: String,
}

/// Shipper, recipient or buyer of a shipment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Party {
    pub address: Address,
    pub contact: Contact,
    pub registration_numbers: Vec<RegistrationNumber>,
}

impl Party {
    pub fn new(address: Address, contact: Contact) -> Self {
        Self {
            address,
            contact,
            registration_numbers: Vec::new(),
        }
    }

    /// Attach a registration number; the issuer defaults to the party's country
    pub fn with_registration_number(
        mut self,
        number: impl Into<String>,
        type_code: impl Into<String>,
        issuer_country_code: Option<String>,
    ) -> Self {
        let issuer_country_code =
            issuer_country_code.unwrap_or_else(|| self.address.country_code().to_string());
        self.registration_numbers.push(RegistrationNumber {
            number: number.into(),
            type_code: type_code.into(),
            issuer_country_code,
        });
        self
    }
}
