//! Structured logging via `tracing`.
//!
//! Log lines go to stderr so that reports written to stdout stay clean.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Filter from `RUST_LOG` if set, else `level`, else [`DEFAULT_LOG_LEVEL`].
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(DEFAULT_LOG_LEVEL)))
}

/// Install the global subscriber.
///
/// # Arguments
///
/// * `level` - Filter directive from the command line, e.g. `debug` or
///   `galaxygen::services=trace`
pub fn init_logging(level: Option<&str>) {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    // a second call (as in tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(console_layer)
        .try_init();
}
