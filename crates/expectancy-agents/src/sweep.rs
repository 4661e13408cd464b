//! Decay sweep: annotate the same two-party stream once per decay value.
//!
//! Each decay gets its own processor, so runs are independent and are
//! spread across the rayon pool.

use expectancy_core::config::{validate_window, DyadicConfig, SweepConfig};
use expectancy_core::errors::ExpectancyResult;
use expectancy_core::models::{AnnotatedTrial, DyadicTrial};
use rayon::prelude::*;
use tracing::info;

use crate::DyadicProcessor;

/// Annotations produced under one decay value.
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub decay: f64,
    pub rows: Vec<AnnotatedTrial>,
}

/// Evenly spaced decays from `start` to `end`, both included.
pub fn decay_grid(config: &SweepConfig) -> ExpectancyResult<Vec<f64>> {
    config.validate()?;
    if config.steps == 1 {
        return Ok(vec![config.start]);
    }
    let step = (config.end - config.start) / (config.steps - 1) as f64;
    Ok((0..config.steps)
        .map(|i| {
            if i == config.steps - 1 {
                config.end
            } else {
                config.start + step * i as f64
            }
        })
        .collect())
}

/// Re-annotate `rows` under every decay in `decays`, keeping the rest of
/// `base` fixed. Results come back in the order of `decays`.
pub fn sweep_decays(
    rows: &[DyadicTrial],
    base: &DyadicConfig,
    decays: &[f64],
) -> ExpectancyResult<Vec<SweepResult>> {
    for &decay in decays {
        validate_window(decay, base.depth)?;
    }

    let span = sweep_span!(decays.len());
    let _guard = span.enter();

    let results = decays
        .par_iter()
        .map(|&decay| {
            let config = DyadicConfig {
                decay,
                ..base.clone()
            };
            let mut processor = DyadicProcessor::new(&config)?;
            Ok(SweepResult {
                decay,
                rows: processor.annotate(rows.iter().cloned()),
            })
        })
        .collect::<ExpectancyResult<Vec<_>>>()?;

    info!(decays = results.len(), rows = rows.len(), "decay sweep complete");
    Ok(results)
}
