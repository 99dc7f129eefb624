//! Moon day calculation.
//!
//! Counts days from a reference new moon (JD 2451549.5, 2000-01-06) and
//! reduces the count modulo the synodic period. Only the calendar date
//! enters the calculation; the time of day is ignored.

use log::debug;

use super::fractional_part;
use crate::core::domain::{LunarCycleDay, Timestamp, SYNODIC_PERIOD_DAYS};
use crate::time::julian::julian_day;

/// Julian Day of the reference new moon.
pub const NEW_MOON_EPOCH_JD: f64 = 2451549.5;

/// Maps a timestamp to its position in the synodic cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseCalculator;

impl PhaseCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Julian Day of the timestamp's calendar date.
    pub fn julian_day(&self, ts: &Timestamp) -> f64 {
        julian_day(ts.year(), ts.month(), ts.day())
    }

    /// Days since the reference new moon; negative before it.
    pub fn days_since_new_moon(&self, ts: &Timestamp) -> f64 {
        self.julian_day(ts) - NEW_MOON_EPOCH_JD
    }

    pub fn days_into_cycle(&self, ts: &Timestamp) -> LunarCycleDay {
        let days_since_new = self.days_since_new_moon(ts);
        let cycles = days_since_new / SYNODIC_PERIOD_DAYS;
        let day = LunarCycleDay::new(fractional_part(cycles) * SYNODIC_PERIOD_DAYS);
        debug!(
            "Phase calculation for {}: days_since_new={}, cycles={}, day={}",
            ts,
            days_since_new,
            cycles,
            day.days()
        );
        day
    }

    /// The moon day rendered with two decimals.
    pub fn format(&self, ts: &Timestamp) -> String {
        self.days_into_cycle(ts).formatted()
    }
}
