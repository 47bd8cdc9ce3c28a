//! Domain model for authenticated sessions and invite codes.

mod error;
mod invite_code;
mod session;

pub use error::{InviteCodeError, SessionError};
pub use invite_code::InviteCode;
pub use session::{BearerToken, FanIdentity, Session, StationId, StationRef};
