//! Logging initialization for the command-line client
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to the binary.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Map a configured level string onto a filter directive.
///
/// Only the first word is used so trailing comments in `.env` files are
/// ignored. `warning` maps to `warn`, `critical` to `error`, and anything
/// unrecognized falls back to `info`.
pub fn normalize_level(log_level: &str) -> &'static str {
    let level = log_level
        .split_whitespace()
        .next()
        .unwrap_or("info")
        .to_lowercase();

    match level.as_str() {
        "warning" => "warn",
        "critical" => "error",
        other => VALID_LEVELS
            .iter()
            .copied()
            .find(|valid| *valid == other)
            .unwrap_or("info"),
    }
}

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `log_level` when set. Logs go to stderr so
/// they never mix with command output on stdout.
pub fn init_logging(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(normalize_level(log_level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
