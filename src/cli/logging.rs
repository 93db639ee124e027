//! Log output setup

use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global stderr subscriber. Level is overridden by `RUST_LOG`.
/// Calling it twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
