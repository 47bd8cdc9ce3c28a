//! Leaderboard domain types.

mod board;
mod kind;

pub use board::{Leaderboard, LeaderboardEntry};
pub use kind::{LeaderboardKind, LeaderboardKindError};
