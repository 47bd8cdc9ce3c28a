//! Periodic job scheduling owned by the application shell.
//!
//! Jobs such as the leaderboard refresh and the token-expiry check are
//! injected into a [`Scheduler`] instead of arming their own timers. The
//! scheduler runs on the tokio clock, so tests drive it with paused time.

mod job;
mod scheduler;

pub use job::PeriodicJob;
pub use scheduler::{JobHandle, ScheduleError, Scheduler};
