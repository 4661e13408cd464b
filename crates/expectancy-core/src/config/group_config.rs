use serde::{Deserialize, Serialize};

use super::defaults;

/// How triplet reconciliation treats a stream that is not grouped in threes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripletPolicy {
    /// Reject ragged or misaligned streams.
    #[default]
    Strict,
    /// Zip positionally and truncate to the shortest position stream.
    Lenient,
}

/// Public-goods (group) agent configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Per-step recency discount in (0, 1]. Default: 1.0.
    pub decay: f64,
    /// Maximum trailing trials considered. Default: 20.
    pub depth: usize,
    /// Phase tag kept by triplet reconciliation. Default: "P-experiment".
    pub phase: String,
    /// Default: strict.
    pub triplet_policy: TripletPolicy,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            decay: defaults::DEFAULT_GROUP_DECAY,
            depth: defaults::DEFAULT_GROUP_DEPTH,
            phase: defaults::DEFAULT_GROUP_PHASE.to_string(),
            triplet_policy: TripletPolicy::default(),
        }
    }
}
