//! Telemetry helpers for hosts embedding `chart-widget`.
//!
//! Nothing here runs implicitly. Hosts either call one of these helpers or
//! install their own `tracing` subscriber and filters.

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling back
/// to `info` when the variable is unset or invalid.
///
/// Returns `false` when the `telemetry` feature is disabled or another global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback("info")
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"chart_widget=trace"` to see every skipped redraw.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
