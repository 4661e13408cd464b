//! Tracing initialization for binaries and tests embedding the agents.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize structured logging.
///
/// Reads `EXPECTANCY_LOG` for filtering, e.g.
/// `EXPECTANCY_LOG=expectancy_agents=debug`. Falls back to
/// `expectancy_agents=info`. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("EXPECTANCY_LOG")
            .unwrap_or_else(|_| EnvFilter::new("expectancy_agents=info"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_test_writer())
            .with(filter)
            .try_init();
    });
}
