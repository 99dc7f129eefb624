//! Proleptic Gregorian day arithmetic.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Signed number of calendar days from `epoch` to `date`.
///
/// Positive when `date` is after `epoch`.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use moon_rust::time::days_between;
///
/// let epoch = NaiveDate::from_ymd_opt(2000, 1, 21).unwrap();
/// let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// assert_eq!(days_between(date, epoch), -20);
/// ```
pub fn days_between(date: NaiveDate, epoch: NaiveDate) -> i64 {
    date.signed_duration_since(epoch).num_days()
}

/// Whole days elapsed from midnight of `epoch` to `datetime`, truncated
/// toward zero.
///
/// Differs from [`days_between`] only before the epoch: 12 hours before
/// epoch midnight is `0` here but `-1` calendar days.
pub fn elapsed_whole_days(datetime: NaiveDateTime, epoch: NaiveDate) -> i64 {
    let seconds = days_between(datetime.date(), epoch) * SECONDS_PER_DAY
        + i64::from(datetime.time().num_seconds_from_midnight());
    seconds / SECONDS_PER_DAY
}

/// Whole seconds since midnight divided by the length of a day, in [0, 1).
///
/// Sub-second precision is dropped.
pub fn day_fraction(datetime: NaiveDateTime) -> f64 {
    let seconds = i64::from(datetime.time().num_seconds_from_midnight());
    seconds as f64 / SECONDS_PER_DAY as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, s).unwrap()
    }

    #[test]
    fn test_days_between_signed() {
        let epoch = date(2000, 1, 21);
        assert_eq!(days_between(epoch, epoch), 0);
        assert_eq!(days_between(date(2000, 1, 22), epoch), 1);
        assert_eq!(days_between(date(1999, 12, 31), epoch), -21);
        assert_eq!(days_between(date(2024, 3, 1), epoch), 8806);
    }

    #[test]
    fn test_days_between_crosses_leap_day() {
        assert_eq!(days_between(date(2024, 3, 1), date(2024, 2, 28)), 2);
        assert_eq!(days_between(date(2023, 3, 1), date(2023, 2, 28)), 1);
        assert_eq!(days_between(date(1900, 3, 1), date(1900, 2, 28)), 1);
    }

    #[test]
    fn test_elapsed_truncates_toward_zero() {
        let epoch = date(2000, 1, 21);
        assert_eq!(elapsed_whole_days(datetime(2000, 1, 22, 18, 0, 0), epoch), 1);
        assert_eq!(elapsed_whole_days(datetime(1999, 12, 31, 12, 0, 0), epoch), -20);
        assert_eq!(elapsed_whole_days(datetime(2000, 1, 20, 0, 0, 0), epoch), -1);
        assert_eq!(elapsed_whole_days(datetime(2000, 1, 20, 0, 0, 1), epoch), 0);
    }

    #[test]
    fn test_day_fraction() {
        assert_eq!(day_fraction(datetime(2000, 1, 1, 0, 0, 0)), 0.0);
        assert_eq!(day_fraction(datetime(2000, 1, 1, 12, 0, 0)), 0.5);
        assert_eq!(day_fraction(datetime(2000, 1, 1, 6, 0, 0)), 0.25);
        let last = day_fraction(datetime(2000, 1, 1, 23, 59, 59));
        assert!(last < 1.0);
        assert!((last - 86_399.0 / 86_400.0).abs() < 1e-15);
    }

    #[test]
    fn test_day_fraction_ignores_subsecond() {
        let dt = date(2000, 1, 1).and_hms_milli_opt(0, 0, 1, 999).unwrap();
        assert_eq!(day_fraction(dt), 1.0 / 86_400.0);
    }
}
