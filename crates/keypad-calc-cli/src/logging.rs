//! Log subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Picks the log filter: `-q` always wins, then `RUST_LOG`, then the `-v` count.
#[must_use]
pub fn build_filter(verbosity: Verbosity) -> EnvFilter {
    if verbosity.is_quiet() {
        return EnvFilter::new(verbosity.log_filter());
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()))
}

/// Installs the stderr fmt subscriber. A second call is a no-op.
///
/// Event targets are shown from `-v` up.
pub fn init_logging(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_target(verbosity.is_verbose())
        .with_writer(std::io::stderr)
        .try_init();
}
