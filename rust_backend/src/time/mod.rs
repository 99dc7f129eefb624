//! Calendar arithmetic used by the moon calculators.
//!
//! - [`calendar`]: whole-day differences and time-of-day fractions on the
//!   proleptic Gregorian calendar
//! - [`julian`]: the fixed-formula Julian Day used by the phase calculation

pub mod calendar;
pub mod julian;

pub use calendar::{days_between, day_fraction, elapsed_whole_days, SECONDS_PER_DAY};
pub use julian::{julian_day, shift_january_february};
