//! Two-party agent: one subject, one partner per trial, alternating roles.

mod agent;
mod processor;

pub use agent::DyadicAgent;
pub use processor::DyadicProcessor;
