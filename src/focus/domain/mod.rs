//! Domain model for focus-task decisions.
//!
//! Status values mirror what the backend reports for an invite code;
//! decisions are plain values returned to the caller, never errors.

mod decision;
mod status;
mod timestamp;
mod transition;

pub use crate::session::domain::{InviteCode, InviteCodeError};
pub use decision::{Approval, DecisionKind, FocusDecision, FocusRejection};
pub use status::{COOLDOWN_WINDOW_HOURS, FocusTaskStatus, FocusTaskSummary, TaskId};
pub use timestamp::{TimestampParseError, parse_backend_timestamp};
pub use transition::FocusTransitionRequest;
