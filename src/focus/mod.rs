//! Focus-task exclusivity and cooldown protocol.
//!
//! At most one task per invite code may be the focus task, and the focus flag
//! of an invite code may change at most once per rolling 24-hour window. The
//! backend is the system of record; this module decides on the client side
//! whether a requested focus change may proceed and why it must not:
//!
//! - Domain types in [`domain`]
//! - Status query port in [`ports`]
//! - HTTP and in-memory status adapters in [`adapters`]
//! - The guard and the switch controller in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
