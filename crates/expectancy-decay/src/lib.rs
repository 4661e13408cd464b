//! # expectancy-decay
//!
//! Recency-weighted running means over append-only histories.
//!
//! [`estimate`] is the free-function form; [`Estimator`] bundles a
//! validated decay/depth pair; [`HistoryBuffer`] is the append-only store
//! agents keep per subject, role and partner.

pub mod history;
pub mod weighted_mean;

pub use history::HistoryBuffer;
pub use weighted_mean::{estimate, plain_mean, weighted_average, Estimator};
