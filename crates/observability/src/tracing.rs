//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for the process.
///
/// Defaults to `info` and is overridable via `RUST_LOG`. Output is JSON
/// lines so the desktop shell and any log shipper parse the same stream.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .json()
        .flatten_event(true)
        .try_init();
}
