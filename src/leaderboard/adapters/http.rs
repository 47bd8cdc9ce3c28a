//! Leaderboard adapter over the fan HTTP API.

use crate::api::ApiClient;
use crate::leaderboard::{
    domain::{LeaderboardEntry, LeaderboardKind},
    ports::{LeaderboardQuery, LeaderboardQueryResult},
};
use crate::session::domain::InviteCode;
use async_trait::async_trait;
use serde::Deserialize;

/// Task rankings requested with a nickname come wrapped with the caller's
/// own row; plain rankings are bare arrays.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LeaderboardBody {
    Rows(Vec<LeaderboardEntry>),
    Wrapped { leaderboard: Vec<LeaderboardEntry> },
}

impl LeaderboardBody {
    fn into_entries(self) -> Vec<LeaderboardEntry> {
        match self {
            Self::Rows(entries) | Self::Wrapped { leaderboard: entries } => entries,
        }
    }
}

/// Queries `GET /api/fan/leaderboard`.
#[derive(Debug, Clone)]
pub struct HttpLeaderboardClient {
    api: ApiClient,
}

impl HttpLeaderboardClient {
    /// Creates an adapter over a shared API client.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl LeaderboardQuery for HttpLeaderboardClient {
    async fn leaderboard(
        &self,
        invite_code: &InviteCode,
        kind: LeaderboardKind,
    ) -> LeaderboardQueryResult<Vec<LeaderboardEntry>> {
        let url = self.api.endpoint(["api", "fan", "leaderboard"])?;
        let mut params = vec![("invite_code", invite_code.as_str().to_owned())];
        params.extend(kind.query_params());
        let body = self.api.get_json::<LeaderboardBody>(url, &params).await?;
        Ok(body.map(LeaderboardBody::into_entries).unwrap_or_default())
    }
}
