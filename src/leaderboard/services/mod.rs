//! Leaderboard services.

mod feed;

pub use feed::{LeaderboardFeed, LeaderboardView, NO_INVITE_CODE};
