//! Ranked rows and fetched snapshots.

use super::LeaderboardKind;
use crate::session::domain::InviteCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ranked fan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// One-based position.
    pub rank: u32,
    /// Fan nickname.
    pub nickname: String,
    /// Points earned in the ranked period.
    #[serde(default)]
    pub points: i64,
    /// Number of completed submissions.
    #[serde(default)]
    pub completed_tasks: u32,
    /// Whether the fan completed a focus task.
    #[serde(default)]
    pub has_focus_task_completed: bool,
}

/// Leaderboard fetched for one invite code at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    kind: LeaderboardKind,
    invite_code: InviteCode,
    entries: Vec<LeaderboardEntry>,
    fetched_at: DateTime<Utc>,
}

impl Leaderboard {
    /// Creates a snapshot.
    #[must_use]
    pub const fn new(
        kind: LeaderboardKind,
        invite_code: InviteCode,
        entries: Vec<LeaderboardEntry>,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            invite_code,
            entries,
            fetched_at,
        }
    }

    /// Returns the ranking kind.
    #[must_use]
    pub const fn kind(&self) -> LeaderboardKind {
        self.kind
    }

    /// Returns the invite code the ranking belongs to.
    #[must_use]
    pub const fn invite_code(&self) -> &InviteCode {
        &self.invite_code
    }

    /// Returns the rows in backend order.
    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Returns when the snapshot was fetched.
    #[must_use]
    pub const fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Reports whether nobody is ranked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the row of the fan called `nickname`.
    #[must_use]
    pub fn position_of(&self, nickname: &str) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|entry| entry.nickname == nickname)
    }
}
