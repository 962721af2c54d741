//! Console logging for the service.
//!
//! Events are filtered by `RUST_LOG` (default `info`) and printed through
//! `tracing_subscriber::fmt`. Request spans come from
//! `tower_http::trace::TraceLayer`, so `RUST_LOG=info,tower_http=debug` shows
//! one line per request and response.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_thread_ids(true)
                .with_line_number(true)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_file(true),
        )
        .try_init()?;
    Ok(())
}
