//! Structured logging setup shared by the binaries.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding log filter directives.
pub const LOG_ENV: &str = "RUST_LOG";

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directives could not be parsed.
    #[error("invalid log filter '{directives}': {reason}")]
    InvalidFilter {
        /// Directives that failed to parse.
        directives: String,
        /// Parser message.
        reason: String,
    },
    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Installs a formatting subscriber that writes to stderr.
///
/// Directives come from `RUST_LOG` when set, otherwise from
/// `default_directives` (for example `"info"`).
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for unparsable directives and
/// [`TelemetryError::Install`] when a subscriber is already installed.
pub fn init_tracing(default_directives: &str) -> Result<(), TelemetryError> {
    let directives = std::env::var(LOG_ENV).unwrap_or_else(|_| default_directives.to_owned());
    let filter = build_filter(&directives)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| TelemetryError::Install(err.to_string()))
}

fn build_filter(directives: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directives).map_err(|err| TelemetryError::InvalidFilter {
        directives: directives.to_owned(),
        reason: err.to_string(),
    })
}
