use expectancy_core::config::validate_window;
use expectancy_core::errors::ConfigError;
use expectancy_core::Expectation;
use serde::{Deserialize, Serialize};

use crate::HistoryBuffer;

/// Exponentially decay-weighted mean over the trailing `depth` entries.
///
/// ```text
/// window  = values[len - min(len, depth) ..]
/// w_k     = decay^k      (k = steps back from the most recent entry)
/// E       = Σ w_k·x_k / Σ w_k      over present x_k only
/// ```
///
/// Missing entries drop out together with their weight slot; they still
/// occupy a window position, so older present values keep their distance.
/// Non-finite values count as missing. Returns `Undefined` for an empty
/// input, a window with nothing present, or a zero weight sum.
pub fn estimate(values: &[Option<f64>], decay: f64, depth: usize) -> Expectation {
    if values.is_empty() || depth == 0 {
        return Expectation::Undefined;
    }
    let window = &values[values.len().saturating_sub(depth)..];

    let mut weight = 1.0;
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for value in window.iter().rev() {
        if let Some(v) = value.filter(|v| v.is_finite()) {
            weighted_sum += weight * v;
            weight_sum += weight;
        }
        weight *= decay;
    }

    if weight_sum == 0.0 {
        Expectation::Undefined
    } else {
        Expectation::new(weighted_sum / weight_sum)
    }
}

/// Unweighted mean over every present value, no window.
pub fn plain_mean(values: &[Option<f64>]) -> Expectation {
    estimate(values, 1.0, values.len())
}

/// Weighted mean of already-computed expectations.
///
/// Any undefined term makes the result undefined, whatever its weight.
pub fn weighted_average(terms: &[(Expectation, f64)]) -> Expectation {
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for (term, weight) in terms {
        match term.value() {
            Some(v) => {
                weighted_sum += weight * v;
                weight_sum += weight;
            }
            None => return Expectation::Undefined,
        }
    }
    if weight_sum == 0.0 {
        Expectation::Undefined
    } else {
        Expectation::new(weighted_sum / weight_sum)
    }
}

/// A validated decay/depth pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimator {
    decay: f64,
    depth: usize,
}

impl Estimator {
    /// Fails unless `decay` is in (0, 1] and `depth >= 1`.
    pub fn new(decay: f64, depth: usize) -> Result<Self, ConfigError> {
        validate_window(decay, depth)?;
        Ok(Self { decay, depth })
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn estimate(&self, values: &[Option<f64>]) -> Expectation {
        estimate(values, self.decay, self.depth)
    }

    pub fn of(&self, history: &HistoryBuffer) -> Expectation {
        self.estimate(history.as_slice())
    }
}
