//! Errors raised by the shared HTTP client.

use std::sync::Arc;
use thiserror::Error;

/// Failures talking to the station backend.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The configured base URL cannot be used.
    #[error("invalid backend base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The request did not complete within the configured timeout.
    #[error("backend request timed out")]
    Timeout,

    /// The backend rejected the bearer token; the session has been cleared.
    #[error("unauthorized, please log in again")]
    Unauthorized,

    /// The backend answered with a non-success status.
    #[error("{}", status_message(.status, .message.as_deref()))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error detail reported by the backend, if any.
        message: Option<String>,
    },

    /// The response body is not the expected JSON.
    #[error("malformed backend response: {0}")]
    Decode(String),

    /// Connection-level failure.
    #[error("backend unreachable: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}

fn status_message(status: &u16, message: Option<&str>) -> String {
    match message {
        Some(detail) => detail.to_owned(),
        None => format!("backend returned HTTP {status}"),
    }
}
