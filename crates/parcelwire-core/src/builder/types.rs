//! Raw inputs held by the request builders until `build()`

use crate::error::Result;
use crate::types::{Address, Contact, Package, Party};
use crate::units::{normalize_dimensions, normalize_weight, LengthUnit, MassUnit};

/// One package exactly as the caller supplied it
///
/// Unit codes stay as text until the builder runs, so an unknown code
/// surfaces as an error from `build()`.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageInput {
    pub weight: f64,
    pub weight_unit: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub dimension_unit: String,
    pub customer_references: String,
}

impl PackageInput {
    /// Normalize into a [`Package`] carrying the given sequence number
    pub(crate) fn normalize(&self, sequence_number: u32) -> Result<Package> {
        let mass_unit: MassUnit = self.weight_unit.parse()?;
        let length_unit: LengthUnit = self.dimension_unit.parse()?;

        Ok(Package::new(
            sequence_number,
            normalize_weight(self.weight, mass_unit),
            normalize_dimensions(self.length, self.width, self.height, length_unit),
            self.customer_references.clone(),
        ))
    }
}

/// A contact block with its address lines and registration numbers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartyInput {
    pub country_code: String,
    pub postal_code: String,
    pub city: String,
    pub street_lines: Vec<String>,
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: Option<String>,
    pub registration_numbers: Vec<RegistrationInput>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationInput {
    pub number: String,
    pub type_code: String,
    pub issuer_country_code: Option<String>,
}

impl PartyInput {
    pub fn new(
        country_code: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        street_lines: Vec<String>,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            postal_code: postal_code.into(),
            city: city.into(),
            street_lines,
            ..Self::default()
        }
    }

    pub fn with_contact(
        mut self,
        name: impl Into<String>,
        company: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        self.name = name.into();
        self.company = company.into();
        self.phone = phone.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub(crate) fn address(&self) -> Result<Address> {
        Address::new(
            self.country_code.clone(),
            self.postal_code.clone(),
            self.city.clone(),
            self.street_lines.clone(),
        )
    }

    /// Assemble the party; errors are qualified with `role`
    pub(crate) fn to_party(&self, role: &str) -> Result<Party> {
        let address = self.address().map_err(|e| e.within(role))?;
        let contact = Contact::new(self.name.clone(), self.company.clone(), self.phone.clone())
            .with_email(self.email.clone());

        Ok(self
            .registration_numbers
            .iter()
            .fold(Party::new(address, contact), |party, registration| {
                party.with_registration_number(
                    registration.number.clone(),
                    registration.type_code.clone(),
                    registration.issuer_country_code.clone(),
                )
            }))
    }
}

/// Normalize packages in insertion order; sequence numbers start at one
pub(crate) fn normalize_packages(inputs: &[PackageInput]) -> Result<Vec<Package>> {
    inputs
        .iter()
        .zip(1u32..)
        .map(|(input, sequence_number)| input.normalize(sequence_number))
        .collect()
}
