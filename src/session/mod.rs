//! Session context for station administrators and fans.
//!
//! Replaces ambient key-value storage with an explicit context object that is
//! populated at login and cleared at logout:
//!
//! - Domain types in [`domain`]
//! - Shared, clonable session handle in [`context`]
//! - Periodic token-expiry check in [`expiry`]

pub mod context;
pub mod domain;
pub mod expiry;

pub use context::SessionContext;
pub use expiry::TokenExpiryCheck;

#[cfg(test)]
mod tests;
