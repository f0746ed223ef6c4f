//! Tracing setup. Logs go to stderr so stdout carries only generated text.

use tracing_subscriber::EnvFilter;

/// Env var holding the tracing filter directive.
pub const LOG_ENV: &str = "DIMGEN_LOG";

/// Install the global subscriber; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
