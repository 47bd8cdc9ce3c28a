//! In-memory leaderboard source for tests and offline runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::leaderboard::{
    domain::{LeaderboardEntry, LeaderboardKind},
    ports::{LeaderboardQuery, LeaderboardQueryError, LeaderboardQueryResult},
};
use crate::session::domain::InviteCode;

type BoardKey = (InviteCode, LeaderboardKind);
type BoardResponse = LeaderboardQueryResult<Vec<LeaderboardEntry>>;

/// Thread-safe scripted leaderboard source.
///
/// Unscripted rankings are empty.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeaderboardQuery {
    boards: Arc<RwLock<HashMap<BoardKey, BoardResponse>>>,
}

impl InMemoryLeaderboardQuery {
    /// Creates a source with no rankings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rows returned for `invite_code` and `kind`.
    pub fn set_entries(
        &self,
        invite_code: InviteCode,
        kind: LeaderboardKind,
        entries: Vec<LeaderboardEntry>,
    ) {
        self.respond((invite_code, kind), Ok(entries));
    }

    /// Makes queries for `invite_code` and `kind` fail with `error`.
    pub fn fail_with(
        &self,
        invite_code: InviteCode,
        kind: LeaderboardKind,
        error: LeaderboardQueryError,
    ) {
        self.respond((invite_code, kind), Err(error));
    }

    fn respond(&self, key: BoardKey, response: BoardResponse) {
        self.boards
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, response);
    }
}

#[async_trait]
impl LeaderboardQuery for InMemoryLeaderboardQuery {
    async fn leaderboard(
        &self,
        invite_code: &InviteCode,
        kind: LeaderboardKind,
    ) -> LeaderboardQueryResult<Vec<LeaderboardEntry>> {
        let boards = self.boards.read().unwrap_or_else(PoisonError::into_inner);
        boards
            .get(&(invite_code.clone(), kind))
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
