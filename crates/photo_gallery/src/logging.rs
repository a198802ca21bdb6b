//! Tracing subscriber setup for hosts that embed the gallery.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_DIRECTIVE: &str = "photo_gallery=info";

/// Installs a global fmt subscriber filtered by `RUST_LOG`, or by `default_directive` when the
/// variable is unset or invalid.
///
/// Returns `false` when a global subscriber was already installed; the existing one is kept.
pub fn init_logging(default_directive: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
