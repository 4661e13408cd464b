//! # expectancy-core
//!
//! Foundation crate for the expectancy workspace.
//! Defines the expectation sum type, trial and record models, traits,
//! errors, config, and constants. Every other crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod expectation;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ExpectancyConfig;
pub use errors::{ExpectancyError, ExpectancyResult};
pub use expectation::Expectation;
pub use models::{
    AnnotatedTrial, DyadicExpectations, DyadicTrial, GroupRecord, HistoryUpdate, PggTrial,
    RawPggRow, Role, SubjectId, Violation,
};
