//! Invite code scalar.

use super::InviteCodeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Short alphanumeric token scoping fans and tasks to one station.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InviteCode(String);

impl InviteCode {
    /// Creates a validated invite code.
    ///
    /// Surrounding whitespace is stripped.
    ///
    /// # Errors
    ///
    /// Returns [`InviteCodeError::Empty`] when nothing remains after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, InviteCodeError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InviteCodeError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for InviteCode {
    type Error = InviteCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InviteCode> for String {
    fn from(value: InviteCode) -> Self {
        value.0
    }
}

impl AsRef<str> for InviteCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InviteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
