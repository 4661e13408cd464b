mod config_error;
mod expectancy_error;
mod reconcile_error;

pub use config_error::ConfigError;
pub use expectancy_error::{ExpectancyError, ExpectancyResult};
pub use reconcile_error::ReconcileError;
