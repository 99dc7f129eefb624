//! Julian Day from civil calendar fields.
//!
//! This is the short textbook formula with real-valued (not floored) century
//! terms. It drifts from the astronomical Julian Day by a fraction of a day,
//! and the phase calculation is calibrated against exactly this drift.

/// January and February are treated as months 13 and 14 of the previous year.
///
/// # Example
/// ```
/// use moon_rust::time::shift_january_february;
///
/// assert_eq!(shift_january_february(2021, 1), (2020, 13));
/// assert_eq!(shift_january_february(2021, 3), (2021, 3));
/// ```
pub fn shift_january_february(year: i32, month: u32) -> (i32, u32) {
    if month == 1 || month == 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    }
}

/// Julian Day for `year`, `month` (1-12) and integer `day`.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (year, month) = shift_january_february(year, month);
    julian_day_shifted(f64::from(year), f64::from(month), f64::from(day))
}

/// Julian Day for fields already in the March-based convention
/// (`month` 3-14).
pub fn julian_day_shifted(year: f64, month: f64, day: f64) -> f64 {
    let a = year / 100.0;
    let b = a / 4.0;
    let c = 2.0 - a + b;
    let e = 365.25 * (year + 4716.0);
    let f = 30.6001 * (month + 1.0);
    c + day + e + f - 1524.5
}
