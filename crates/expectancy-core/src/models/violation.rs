use serde::{Deserialize, Serialize};

use crate::Expectation;

/// Expectation violation: how far an observed value landed from its estimate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Violation {
    /// `observed - expectation`.
    pub signed: Expectation,
    /// `|observed - expectation|`.
    pub magnitude: Expectation,
}

impl Violation {
    pub fn between(observed: impl Into<Expectation>, expectation: Expectation) -> Self {
        let signed = observed.into() - expectation;
        Self {
            signed,
            magnitude: signed.abs(),
        }
    }
}
