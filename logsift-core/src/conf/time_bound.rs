use crate::conf::ConfigError;
use crate::constants::LOG_TIME_LAYOUT;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};

/// Parses a time window bound.
///
/// Accepts RFC 3339, the access log's own layout, or a bare date which is read
/// as midnight UTC.
pub fn parse_time_bound(value: &str) -> Result<DateTime<FixedOffset>, ConfigError> {
    let value = value.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts);
    }
    if let Ok(ts) = DateTime::parse_from_str(value, LOG_TIME_LAYOUT) {
        return Ok(ts);
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
        .map_err(|source| ConfigError::InvalidTime {
            value: value.to_string(),
            source,
        })
}
