//! Public-goods agent: one subject, three partners per trial.

mod agent;
mod processor;
mod punishment;
mod reconcile;

pub use agent::GroupAgent;
pub use processor::GroupProcessor;
pub use punishment::{PunishmentExpectations, PunishmentLedger};
pub use reconcile::{reconcile_triplets, TripletReconciler};
