//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::GlobalArgs;

/// Default filter directive for the given verbosity flags.
///
/// `--quiet` wins over `--verbose` when both are given.
pub fn default_directive(global: &GlobalArgs) -> &'static str {
    if global.quiet {
        "error"
    } else if global.verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs a stderr subscriber. `RUST_LOG` overrides the flag-derived level.
pub fn init(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(global)));

    // Fails only if a subscriber is already installed, which is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
