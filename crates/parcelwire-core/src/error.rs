//! Error types for the parcelwire core library
//!
//! Every failure the builders, the unit normalizer and the wire mappers can
//! report is a variant of [`Error`]. Variants are structured so callers can
//! tell which rule failed and which field or package triggered it.

use std::fmt;
use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Main error type for parcelwire operations
#[derive(Error, Debug)]
pub enum Error {
    /// A weight or dimension unit outside the supported set
    #[error("Invalid {quantity} unit of measurement: '{unit}'")]
    InvalidUnit {
        quantity: Quantity,
        unit: String,
    },

    /// Packages disagree on their canonical weight or dimension unit
    #[error("All package {quantity}s must have a consistent unit of measurement: package {sequence_number} uses {found}, expected {expected}")]
    InconsistentUnit {
        quantity: Quantity,
        sequence_number: u32,
        expected: String,
        found: String,
    },

    /// The shared unit pair is neither metric nor imperial
    #[error("Units of measurement have to be consistent (either metric or US system), got {weight} with {dimensions}")]
    InconsistentUnitSystem {
        weight: String,
        dimensions: String,
    },

    /// A mandatory builder input was never supplied
    #[error("Missing required field: {field}")]
    MissingRequiredField {
        field: String,
    },

    /// No packages to derive a unit system from
    #[error("Package list is empty")]
    EmptyPackageList,

    /// A supplied value is present but structurally unusable
    #[error("Invalid field: {field} - {message}")]
    InvalidField {
        field: String,
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failure reported by the transport collaborator
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Physical quantity a unit of measurement applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quantity {
    Weight,
    Dimension,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Weight => write!(f, "weight"),
            Quantity::Dimension => write!(f, "dimension"),
        }
    }
}

impl Error {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Error::MissingRequiredField { field: field.into() }
    }

    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Qualify a field-level error with the entity it belongs to
    pub(crate) fn within(self, owner: &str) -> Self {
        match self {
            Error::MissingRequiredField { field } => Error::MissingRequiredField {
                field: format!("{}.{}", owner, field),
            },
            Error::InvalidField { field, message } => Error::InvalidField {
                field: format!("{}.{}", owner, field),
                message,
            },
            other => other,
        }
    }

    /// Name of the field or quantity this error is about, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::MissingRequiredField { field } | Error::InvalidField { field, .. } => Some(field.as_str()),
            Error::InvalidUnit { quantity, .. } | Error::InconsistentUnit { quantity, .. } => {
                Some(match quantity {
                    Quantity::Weight => "weight",
                    Quantity::Dimension => "dimensions",
                })
            }
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Configuration {
            message: err.to_string(),
            source: Some(err.into()),
        }
    }
}
