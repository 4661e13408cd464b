//! Layered configuration loaded from TOML.
//!
//! Every section is `#[serde(default)]`, so an empty document yields the
//! defaults in [`defaults`].

pub mod defaults;
mod dyadic_config;
mod group_config;
mod sweep_config;

pub use dyadic_config::DyadicConfig;
pub use group_config::{GroupConfig, TripletPolicy};
pub use sweep_config::SweepConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ExpectancyResult};

/// Top-level configuration aggregating all sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectancyConfig {
    pub dyadic: DyadicConfig,
    pub group: GroupConfig,
    pub sweep: SweepConfig,
}

impl ExpectancyConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> ExpectancyResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section's ranges.
    pub fn validate(&self) -> ExpectancyResult<()> {
        validate_window(self.dyadic.decay, self.dyadic.depth)?;
        validate_window(self.group.decay, self.group.depth)?;
        self.sweep.validate()?;
        Ok(())
    }
}

/// Shared range check for a decay/depth pair.
pub fn validate_window(decay: f64, depth: usize) -> Result<(), ConfigError> {
    if !(decay > 0.0 && decay <= 1.0) {
        return Err(ConfigError::InvalidDecay { value: decay });
    }
    if depth == 0 {
        return Err(ConfigError::InvalidDepth { value: depth });
    }
    Ok(())
}
