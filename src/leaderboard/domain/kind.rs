//! Leaderboard tabs and their query parameters.

use crate::focus::domain::TaskId;
use std::fmt;
use thiserror::Error;

/// Ranking requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeaderboardKind {
    /// All-time points across every task.
    #[default]
    Overall,
    /// Points earned today.
    Daily,
    /// Points earned on focus tasks.
    Focus,
    /// Points earned on one task.
    Task(TaskId),
}

/// Errors returned while parsing a [`LeaderboardKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeaderboardKindError {
    /// The kind name is not one of `overall`, `daily`, `focus`, `task`.
    #[error("unknown leaderboard kind '{0}'")]
    Unknown(String),

    /// A task leaderboard was requested without a task id.
    #[error("a task leaderboard requires a task id")]
    MissingTaskId,

    /// A task id was supplied for a kind that ranks more than one task.
    #[error("a task id only applies to task leaderboards, not '{0}'")]
    UnexpectedTaskId(&'static str),
}

impl LeaderboardKind {
    /// Parses a kind name, case-insensitively.
    ///
    /// `task_id` is required for `task` and refused for every other kind.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardKindError::Unknown`] for unrecognised names,
    /// [`LeaderboardKindError::MissingTaskId`] for `task` without an id and
    /// [`LeaderboardKindError::UnexpectedTaskId`] for an id on another kind.
    pub fn parse(kind: &str, task_id: Option<TaskId>) -> Result<Self, LeaderboardKindError> {
        let name = kind.trim();
        let ranking = if name.eq_ignore_ascii_case("overall") {
            Self::Overall
        } else if name.eq_ignore_ascii_case("daily") {
            Self::Daily
        } else if name.eq_ignore_ascii_case("focus") {
            Self::Focus
        } else if name.eq_ignore_ascii_case("task") {
            return task_id
                .map(Self::Task)
                .ok_or(LeaderboardKindError::MissingTaskId);
        } else {
            return Err(LeaderboardKindError::Unknown(name.to_owned()));
        };
        match task_id {
            Some(_) => Err(LeaderboardKindError::UnexpectedTaskId(ranking.as_str())),
            None => Ok(ranking),
        }
    }

    /// Returns the backend `type` parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Daily => "daily",
            Self::Focus => "focus",
            Self::Task(_) => "task",
        }
    }

    /// Returns the task of a per-task leaderboard.
    #[must_use]
    pub const fn task_id(&self) -> Option<TaskId> {
        match self {
            Self::Task(id) => Some(*id),
            Self::Overall | Self::Daily | Self::Focus => None,
        }
    }

    /// Builds the `type` and `task_id` query parameters.
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("type", self.as_str().to_owned())];
        if let Some(task_id) = self.task_id() {
            params.push(("task_id", task_id.to_string()));
        }
        params
    }
}

impl fmt::Display for LeaderboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Task(id) => write!(f, "task {id}"),
            Self::Overall | Self::Daily | Self::Focus => f.write_str(self.as_str()),
        }
    }
}
