//! Query port for ranked fan rows.

use crate::api::ApiError;
use crate::leaderboard::domain::{LeaderboardEntry, LeaderboardKind};
use crate::session::domain::InviteCode;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for leaderboard queries.
pub type LeaderboardQueryResult<T> = Result<T, LeaderboardQueryError>;

/// Read-only access to backend leaderboards.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaderboardQuery: Send + Sync {
    /// Fetches the `kind` ranking of the fans of `invite_code`.
    ///
    /// An empty ranking is returned as an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardQueryError`] when the request fails.
    async fn leaderboard(
        &self,
        invite_code: &InviteCode,
        kind: LeaderboardKind,
    ) -> LeaderboardQueryResult<Vec<LeaderboardEntry>>;
}

/// Errors returned by leaderboard adapters.
#[derive(Debug, Clone, Error)]
pub enum LeaderboardQueryError {
    /// The request failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}
