//! Status query port for the focus-task state of an invite code.

use crate::api::ApiError;
use crate::focus::domain::{FocusTaskStatus, InviteCode};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for focus status queries.
pub type FocusStatusQueryResult<T> = Result<T, FocusStatusQueryError>;

/// Read-only access to the backend's focus-task status.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FocusStatusQuery: Send + Sync {
    /// Fetches the current focus status of `invite_code`.
    ///
    /// # Errors
    ///
    /// Returns [`FocusStatusQueryError::Empty`] when the backend answered
    /// without data, or [`FocusStatusQueryError::Api`] for transport,
    /// status and decoding failures.
    async fn focus_status(&self, invite_code: &InviteCode)
    -> FocusStatusQueryResult<FocusTaskStatus>;
}

/// Errors returned by focus status adapters.
#[derive(Debug, Clone, Error)]
pub enum FocusStatusQueryError {
    /// The backend answered without a status body.
    #[error("no focus status returned for invite code {0}")]
    Empty(InviteCode),

    /// The request failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}
