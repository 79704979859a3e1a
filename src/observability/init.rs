//! Tracing subscriber initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber with an env-filter directive.
///
/// # Filter Resolution
///
/// 1. The `SHELFSYNC_LOG` environment variable, if set
/// 2. `trace_level` from the configuration file, if set
/// 3. Default: `"info"`
///
/// Log lines go to stderr so the driver's book listing on stdout stays
/// machine-readable.
///
/// # Initialization Behavior
///
/// Idempotent: only the first call installs a subscriber, later calls are
/// silently ignored.
pub fn init_tracing(trace_level: Option<&str>) {
    let directive = std::env::var("SHELFSYNC_LOG")
        .ok()
        .or_else(|| trace_level.map(str::to_string))
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
