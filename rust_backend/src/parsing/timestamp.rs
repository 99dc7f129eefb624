use chrono::{NaiveDate, NaiveDateTime};

use crate::core::domain::Timestamp;
use crate::error::{MoonError, MoonResult};

/// Date-time layouts accepted by [`parse_timestamp`], tried in order.
///
/// The first is the value of an HTML `datetime-local` input.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse one civil date-time.
///
/// Accepts `YYYY-MM-DDTHH:MM`, optionally with seconds and fractional
/// seconds, a space in place of `T`, or a bare `YYYY-MM-DD` (midnight).
/// Surrounding whitespace is ignored. No timezone suffix is accepted.
pub fn parse_timestamp(input: &str) -> MoonResult<Timestamp> {
    let trimmed = input.trim();

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Timestamp::new(datetime));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(Timestamp::at_midnight(date));
    }

    Err(MoonError::InvalidTimestamp(format!(
        "'{}' is not a date-time of the form YYYY-MM-DDTHH:MM",
        input
    )))
}

/// Parse several inputs, one result per input.
pub fn parse_batch(inputs: &[&str]) -> Vec<MoonResult<Timestamp>> {
    inputs.iter().map(|s| parse_timestamp(s)).collect()
}

/// Parser facade for callers that prefer a type.
pub struct TimestampParser;

impl TimestampParser {
    pub fn parse(input: &str) -> MoonResult<Timestamp> {
        parse_timestamp(input)
    }

    pub fn parse_batch(inputs: &[&str]) -> Vec<MoonResult<Timestamp>> {
        parse_batch(inputs)
    }
}
