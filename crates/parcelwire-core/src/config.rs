//! Mapping configuration
//!
//! Options that tune how domain requests are projected onto the wire. Every
//! field has a default, so an empty TOML or JSON document is a valid
//! configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dangerous goods content id the carrier assigns to dry ice
pub const DRY_ICE_CONTENT_ID: &str = "901";

/// Options shared by the rate and shipment mappers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Content id placed on dry ice dangerous goods entries
    pub dry_ice_content_id: String,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            dry_ice_content_id: DRY_ICE_CONTENT_ID.to_string(),
        }
    }
}

impl MapperConfig {
    /// Parse a configuration from TOML
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from JSON
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, choosing the format by extension
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| Error::Configuration {
            message: format!("Failed to read config file {}: {}", path.display(), e),
            source: Some(e.into()),
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&source),
            Some("toml") | None => Self::from_toml_str(&source),
            Some(other) => Err(Error::Configuration {
                message: format!("Unsupported config file format: {}", other),
                source: None,
            }),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.dry_ice_content_id.trim().is_empty() {
            return Err(Error::Configuration {
                message: "dry_ice_content_id cannot be empty".to_string(),
                source: None,
            });
        }
        Ok(())
    }
}
