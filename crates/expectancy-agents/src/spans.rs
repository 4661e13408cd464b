//! Span definitions per operation: annotation, reconciliation, sweep.

/// Span around one pass of an agent over a row stream.
#[macro_export]
macro_rules! annotate_span {
    ($variant:expr, $rows:expr) => {
        tracing::info_span!("expectancy.annotate", variant = $variant, rows = $rows)
    };
}

/// Span around triplet reconciliation of raw public-goods rows.
#[macro_export]
macro_rules! reconcile_span {
    ($rows:expr, $phase:expr) => {
        tracing::info_span!("expectancy.reconcile", rows = $rows, phase = %$phase)
    };
}

/// Span around a decay sweep.
#[macro_export]
macro_rules! sweep_span {
    ($decays:expr) => {
        tracing::info_span!("expectancy.sweep", decays = $decays)
    };
}
