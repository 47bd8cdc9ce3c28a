//! Backend timestamp decoding.
//!
//! The backend serialises naive UTC datetimes without an offset
//! (`2025-03-01T08:30:00.123456`). RFC 3339 values with an explicit offset
//! are accepted as well.

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Error returned for timestamps in no recognised format.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognised timestamp: {0}")]
pub struct TimestampParseError(pub String);

/// Parses a backend timestamp, reading offset-less values as UTC.
///
/// # Errors
///
/// Returns [`TimestampParseError`] when the value matches no accepted
/// format.
pub fn parse_backend_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampParseError> {
    let trimmed = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TimestampParseError(raw.to_owned()))
}

/// Serde adapter for optional backend timestamps.
pub(crate) mod optional {
    use super::parse_backend_timestamp;
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse_backend_timestamp(&raw).map_err(de::Error::custom))
            .transpose()
    }

    pub(crate) fn serialize<S>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(timestamp) => {
                serializer.serialize_some(&timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            None => serializer.serialize_none(),
        }
    }
}
