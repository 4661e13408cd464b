use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Evenly spaced grid of decay values to re-annotate a stream with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// First decay in the grid. Default: 0.01.
    pub start: f64,
    /// Last decay in the grid. Default: 0.99.
    pub end: f64,
    /// Number of grid points, endpoints included. Default: 99.
    pub steps: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: defaults::DEFAULT_SWEEP_START,
            end: defaults::DEFAULT_SWEEP_END,
            steps: defaults::DEFAULT_SWEEP_STEPS,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::InvalidSweep {
                reason: "steps must be at least 1".to_string(),
            });
        }
        if self.start > self.end {
            return Err(ConfigError::InvalidSweep {
                reason: format!("start {} exceeds end {}", self.start, self.end),
            });
        }
        for bound in [self.start, self.end] {
            if !(bound > 0.0 && bound <= 1.0) {
                return Err(ConfigError::InvalidDecay { value: bound });
            }
        }
        Ok(())
    }
}
