//! Optional TOML configuration.
//!
//! ```toml
//! [pricing]
//! unit_rate = "4.5"
//! crypto_divisor = "1500"
//! ```
//!
//! Missing sections and keys fall back to the built-in rates.

use crate::domain::pricing::PricingConfig;
use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pricing: PricingConfig,
}

impl AppConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(source)?;
        config.pricing.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
