//! Serde adapter for birthdates.
//!
//! Birthdates are plain calendar dates in memory but are interchanged as an
//! ISO-8601 date-time at midnight UTC, e.g. `1990-01-15T00:00:00.000Z`.
//! Deserialization accepts any RFC 3339 date-time (the UTC date is kept) and
//! also a bare `YYYY-MM-DD` date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};

use crate::error::{EngineError, EngineResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as midnight UTC.
pub fn to_midnight_utc(date: &NaiveDate) -> String {
    format!("{}T00:00:00.000Z", date.format(DATE_FORMAT))
}

/// Parses either an RFC 3339 date-time or a bare date.
///
/// # Errors
///
/// Returns [`EngineError::InvalidParameter`] for anything else.
pub fn parse(value: &str) -> EngineResult<NaiveDate> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Ok(date_time.with_timezone(&Utc).date_naive());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| EngineError::invalid_parameter("birthdate", format!("'{}': {}", value, e)))
}

pub(crate) fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_midnight_utc(date))
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse(&value).map_err(de::Error::custom)
}
