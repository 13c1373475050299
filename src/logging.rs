//! Tracing setup for the CLI binary.

use tracing_subscriber::EnvFilter;

/// Initialize tracing to stderr.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Stderr keeps
/// stdout clean for catalog output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}
