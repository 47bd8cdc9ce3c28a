//! Error types for session and invite code validation.

use super::StationId;
use thiserror::Error;

/// Errors returned while constructing invite codes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InviteCodeError {
    /// The invite code is empty after trimming.
    #[error("invite code must not be empty")]
    Empty,
}

/// Errors returned by session context operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// No session is active.
    #[error("no active session, log in first")]
    NotAuthenticated,

    /// The station is not one of the stations granted to the session.
    #[error("station {0} is not available in the current session")]
    UnknownStation(StationId),
}
