//! Telemetry helpers for applications embedding `cosmic-calendar`.
//!
//! The engine only emits `tracing` events. Installing a subscriber is left to
//! the host unless it opts into `init_default_tracing`.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_TRACE_FILTER: &str = "cosmic_calendar=info";

/// Installs a compact fmt subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or the host already set a
/// global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACE_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialization_is_refused() {
        let _ = init_default_tracing();
        assert!(!init_default_tracing());
    }
}
