//! Logging setup for the command-line front end.
//!
//! Diagnostics go to stderr through `tracing`, leaving stdout for reports.
//! `RUST_LOG` takes precedence over the `-v` count when it is set.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a given `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        // Already configured - this is fine
        eprintln!("Note: Logging already configured: {}", e);
    }
}
