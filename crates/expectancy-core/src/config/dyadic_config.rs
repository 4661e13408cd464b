use serde::{Deserialize, Serialize};

use super::defaults;

/// Two-party (ultimatum / trust game) agent configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DyadicConfig {
    /// Per-step recency discount in (0, 1]. Default: 1.0.
    pub decay: f64,
    /// Maximum trailing trials considered. Default: 400.
    pub depth: usize,
    /// Clear histories whenever the block id changes. Default: true.
    pub reset_on_block: bool,
    /// Total stake of one round, used to recode offers as amounts received. Default: 10.
    pub stake: f64,
}

impl Default for DyadicConfig {
    fn default() -> Self {
        Self {
            decay: defaults::DEFAULT_DYADIC_DECAY,
            depth: defaults::DEFAULT_DYADIC_DEPTH,
            reset_on_block: defaults::DEFAULT_RESET_ON_BLOCK,
            stake: defaults::DEFAULT_STAKE,
        }
    }
}
