use crate::units::{Dimensions, Weight};
use serde::Serialize;

/// One physical parcel, with measurements in canonical units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Package {
    sequence_number: u32,
    weight: Weight,
    dimensions: Dimensions,
    customer_references: String,
}

impl Package {
    pub fn new(
        sequence_number: u32,
        weight: Weight,
        dimensions: Dimensions,
        customer_references: impl Into<String>,
    ) -> Self {
        Self {
            sequence_number,
            weight,
            dimensions,
            customer_references: customer_references.into(),
        }
    }

    pub fn sequence_number(&self) -> u32 {
        self.sequence_number
    }

    pub fn weight(&self) -> &Weight {
        &self.weight
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn customer_references(&self) -> &str {
        &self.customer_references
    }
}
