//! Logging setup for the CLI.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// The level comes from `RUST_LOG` (e.g. `RUST_LOG=duty_dial=debug`) and
/// defaults to `warn`. Logs go to stderr so stdout stays valid JSON.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .init();
}
