//! Fanquest: client core for a fan-engagement task platform.
//!
//! Station administrators publish tasks to fans who join with invite codes.
//! The backend owns all state; this crate holds the client-side rules and
//! plumbing around it.
//!
//! # Architecture
//!
//! Fanquest follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`focus`]: Focus-task exclusivity and cooldown guard
//! - [`leaderboard`]: Fan rankings and their refresh feed
//! - [`session`]: Administrator session and cached fan identity
//! - [`schedule`]: Periodic background jobs
//! - [`api`]: Shared HTTP client for the station backend
//! - [`config`]: Layered client configuration
//! - [`telemetry`]: Log subscriber setup

pub mod api;
pub mod config;
pub mod focus;
pub mod leaderboard;
pub mod schedule;
pub mod session;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod test_support;
