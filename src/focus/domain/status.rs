//! Focus-task status reported by the backend for one invite code.

use super::timestamp;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Length of the window after a focus change during which no further change
/// is permitted.
pub const COOLDOWN_WINDOW_HOURS: i64 = 24;

/// Backend identifier of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of the task currently holding the focus slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusTaskSummary {
    /// Task identifier.
    pub id: TaskId,
    /// Task title, shown when another task is blocked by this one.
    pub title: String,
    /// Task creation time.
    #[serde(default, with = "timestamp::optional")]
    pub created_at: Option<DateTime<Utc>>,
}

impl FocusTaskSummary {
    /// Creates a summary without a creation time.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            created_at: None,
        }
    }
}

/// Current focus-task occupancy and cooldown for an invite code.
///
/// Only `has_focus_task` is mandatory on the wire. `is_in_cooldown` may be
/// `null` when the invite code never changed its focus task; that reads as
/// `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusTaskStatus {
    /// Invite code the status belongs to, as echoed by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_code: Option<String>,
    /// Whether an active focus task exists.
    pub has_focus_task: bool,
    /// The active focus task, if the backend included it.
    #[serde(default)]
    pub focus_task: Option<FocusTaskSummary>,
    /// Whether a focus change happened within the cooldown window.
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_in_cooldown: bool,
    /// Seconds until the cooldown lapses.
    #[serde(default)]
    pub cooldown_remaining_seconds: u64,
    /// Time of the last focus change.
    #[serde(default, with = "timestamp::optional")]
    pub last_change_time: Option<DateTime<Utc>>,
    /// Time at which the cooldown lapses.
    #[serde(default, with = "timestamp::optional")]
    pub cooldown_until_time: Option<DateTime<Utc>>,
    /// Backend clock at the time of the response.
    #[serde(default, with = "timestamp::optional")]
    pub current_time: Option<DateTime<Utc>>,
}

impl FocusTaskStatus {
    /// Status of an invite code with no focus task and no cooldown.
    #[must_use]
    pub const fn vacant() -> Self {
        Self {
            invite_code: None,
            has_focus_task: false,
            focus_task: None,
            is_in_cooldown: false,
            cooldown_remaining_seconds: 0,
            last_change_time: None,
            cooldown_until_time: None,
            current_time: None,
        }
    }

    /// Marks the focus slot as occupied by `task`.
    #[must_use]
    pub fn with_focus_task(mut self, task: FocusTaskSummary) -> Self {
        self.has_focus_task = true;
        self.focus_task = Some(task);
        self
    }

    /// Marks the invite code as cooling down after a change at
    /// `last_change`.
    #[must_use]
    pub fn with_cooldown_since(mut self, last_change: DateTime<Utc>) -> Self {
        self.is_in_cooldown = true;
        self.last_change_time = Some(last_change);
        self.cooldown_until_time = Some(last_change + cooldown_window());
        self
    }

    /// Returns when the cooldown lapses.
    ///
    /// Uses the reported cooldown end, falling back to the last change time
    /// plus the cooldown window. Returns `None` when neither is known.
    #[must_use]
    pub fn resume_time(&self) -> Option<DateTime<Utc>> {
        self.cooldown_until_time
            .or_else(|| self.last_change_time.map(|last| last + cooldown_window()))
    }

    /// Returns the title of the occupying focus task, if reported.
    #[must_use]
    pub fn focus_task_title(&self) -> Option<&str> {
        self.focus_task.as_ref().map(|task| task.title.as_str())
    }
}

fn cooldown_window() -> Duration {
    Duration::hours(COOLDOWN_WINDOW_HOURS)
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
