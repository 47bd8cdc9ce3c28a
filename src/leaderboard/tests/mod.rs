//! Unit tests for the leaderboard module.

mod kind_tests;
