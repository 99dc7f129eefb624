//! Moon sign calculation.
//!
//! The lunar longitude is approximated by
//!
//! ```text
//! m = 13.1762·d + 12.0947·cos(0.11403·d)·sin(0.11403·(d+1)) − 6.627
//! ```
//!
//! where `d` is the continuous day count from the reference epoch
//! (2000-01-21, midnight). The formula was fitted against ephemeris tables
//! around that date and its constants are kept exactly.

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::fractional_part;
use crate::core::domain::{LunarLongitude, SignClassification, Timestamp};
use crate::time::calendar::{day_fraction, days_between, elapsed_whole_days};

/// Days from 0001-01-01 (day 1) to the reference epoch 2000-01-21.
pub const REFERENCE_EPOCH_DAYS_FROM_CE: i32 = 730_140;

const DAILY_MOTION_DEG: f64 = 13.1762;
const PERTURBATION_AMPLITUDE_DEG: f64 = 12.0947;
const PERTURBATION_RATE_RAD: f64 = 0.11403;
const LONGITUDE_OFFSET_DEG: f64 = 6.627;

/// How whole days before the epoch are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayCountConvention {
    /// Calendar-date difference; the time of day only contributes the fraction.
    #[default]
    Calendar,
    /// Elapsed time from epoch midnight truncated toward zero, then the
    /// time-of-day fraction added on top.
    Elapsed,
}

/// Intermediate values of one sign calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignComputation {
    /// Continuous day coordinate `d`.
    pub day_offset: f64,
    /// Unreduced longitude `m`, in degrees.
    pub raw_longitude: f64,
    /// `m / 360` reduced into [0, 1).
    pub cycle_fraction: f64,
    pub longitude: LunarLongitude,
    pub classification: SignClassification,
}

/// Maps a timestamp to one of the twelve zodiac bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignCalculator {
    day_count: DayCountConvention,
}

impl SignCalculator {
    pub fn new(day_count: DayCountConvention) -> Self {
        Self { day_count }
    }

    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// The calendar date at which `d = 0`.
    pub fn reference_epoch() -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(REFERENCE_EPOCH_DAYS_FROM_CE).unwrap_or_default()
    }

    /// Whole days from the reference epoch under the configured convention.
    pub fn days_since_epoch(&self, ts: &Timestamp) -> i64 {
        let epoch = Self::reference_epoch();
        match self.day_count {
            DayCountConvention::Calendar => days_between(ts.date(), epoch),
            DayCountConvention::Elapsed => elapsed_whole_days(ts.datetime(), epoch),
        }
    }

    /// The continuous day coordinate `d`.
    pub fn day_offset(&self, ts: &Timestamp) -> f64 {
        self.days_since_epoch(ts) as f64 + day_fraction(ts.datetime())
    }

    pub fn compute(&self, ts: &Timestamp) -> SignComputation {
        let day_offset = self.day_offset(ts);
        let m = raw_longitude(day_offset);
        let cycle_fraction = fractional_part(m / 360.0);
        let longitude = LunarLongitude::new(cycle_fraction * 360.0);
        let classification = longitude.classify();

        debug!(
            "Sign calculation for {}: d={}, m={}, longitude={}",
            ts,
            day_offset,
            m,
            longitude.degrees()
        );
        if !classification.is_recognized() {
            warn!(
                "Longitude {} for {} fell outside every zodiac band",
                longitude.degrees(),
                ts
            );
        }

        SignComputation {
            day_offset,
            raw_longitude: m,
            cycle_fraction,
            longitude,
            classification,
        }
    }

    pub fn longitude(&self, ts: &Timestamp) -> LunarLongitude {
        self.compute(ts).longitude
    }

    pub fn classify(&self, ts: &Timestamp) -> SignClassification {
        self.compute(ts).classification
    }
}

/// Unreduced lunar longitude `m` for day coordinate `d`, in degrees.
pub fn raw_longitude(d: f64) -> f64 {
    DAILY_MOTION_DEG * d
        + PERTURBATION_AMPLITUDE_DEG
            * (PERTURBATION_RATE_RAD * d).cos()
            * (PERTURBATION_RATE_RAD * (d + 1.0)).sin()
        - LONGITUDE_OFFSET_DEG
}

/// Reduces any longitude into [0, 360).
pub fn normalize_longitude(m: f64) -> f64 {
    fractional_part(m / 360.0) * 360.0
}
