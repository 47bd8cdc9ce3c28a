//! Fan leaderboards for an invite code.
//!
//! The backend ranks the fans of an invite code overall, for the current day,
//! for focus tasks and per task. This module fetches those rankings and keeps
//! the latest snapshot for display, refreshed on a fixed interval by the
//! scheduler.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
