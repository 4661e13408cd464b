//! # expectancy-agents
//!
//! Online agents that replay an ordered trial stream and attach
//! expectation features to every row.
//!
//! - [`dyadic`]: ultimatum / trust game, one partner per trial.
//! - [`group`]: public-goods game with three partners, plus triplet
//!   reconciliation of the raw per-partner rows.
//! - [`summary`]: per-block aggregation of annotated two-party trials.
//! - [`sweep`]: re-annotation of one stream across a grid of decays.

#[macro_use]
pub mod spans;

pub mod dyadic;
pub mod group;
pub mod summary;
pub mod sweep;
pub mod tracing_setup;

pub use dyadic::{DyadicAgent, DyadicProcessor};
pub use group::{GroupAgent, GroupProcessor, TripletReconciler};
pub use summary::{summarize_blocks, BlockSummary};
pub use sweep::{decay_grid, sweep_decays, SweepResult};
