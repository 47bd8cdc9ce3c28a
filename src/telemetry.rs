//! Structured logging setup for the command-line client.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directives do not parse.
    #[error("invalid log filter '{directives}': {source}")]
    InvalidFilter {
        /// Rejected directives.
        directives: String,
        /// Parser error.
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber is already installed.
    #[error("log subscriber already installed")]
    AlreadyInstalled,
}

/// Builds the filter for `directives`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when the directives do not parse.
pub fn filter(directives: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directives).map_err(|source| TelemetryError::InvalidFilter {
        directives: directives.to_owned(),
        source,
    })
}

/// Installs a `fmt` subscriber that writes to stderr, keeping stdout for
/// command output.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init(directives: &str) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(directives)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|_| TelemetryError::AlreadyInstalled)
}
