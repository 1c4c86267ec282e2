//! Tracing subscriber setup for the binary.
//!
//! `RUST_LOG` wins when set; otherwise the configured filter applies.

use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, falling back to `default_directives`
pub fn build_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global fmt subscriber
///
/// Calling this twice is harmless: the second install is ignored.
pub fn init(default_directives: &str) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_directives))
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter = default_directives, "tracing initialized");
    }
}
