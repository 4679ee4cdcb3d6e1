//! Timestamp parsing for API payloads.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::NordPoolError;

/// Parses an API timestamp.
///
/// Accepts RFC 3339 with any offset (fractions up to nanoseconds) and falls back to a
/// naive `YYYY-MM-DDTHH:MM:SS[.f]` timestamp read as UTC.
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, NordPoolError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| NordPoolError::Decode(format!("invalid timestamp {:?}: {}", value, e)))
}
