//! Port abstractions for leaderboard retrieval.

mod query;

pub use query::{LeaderboardQuery, LeaderboardQueryError, LeaderboardQueryResult};

#[cfg(test)]
pub(crate) use query::MockLeaderboardQuery;
