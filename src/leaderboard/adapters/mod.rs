//! Adapter implementations of the leaderboard port.

mod http;
mod memory;

pub use http::HttpLeaderboardClient;
pub use memory::InMemoryLeaderboardQuery;
