//! Property tests for the moon calculators.
//!
//! These tests ensure that:
//! 1. The longitude reduction always lands in [0, 360)
//! 2. Every timestamp classifies into one of the twelve signs
//! 3. The moon day always lies in [0, 29.53) with two decimals
//! 4. Repeated calls are bit-identical

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use moon_rust::algorithms::sign::{normalize_longitude, raw_longitude};
use moon_rust::algorithms::{fractional_part, DayCountConvention, PhaseCalculator, SignCalculator};
use moon_rust::core::domain::{Timestamp, SYNODIC_PERIOD_DAYS};

// ==================== Strategies ====================

fn timestamp_strategy() -> impl Strategy<Value = Timestamp> {
    // 0001-01-01 through 9999-12-31, any second of the day
    (1i32..=3_652_059, 0u32..86_400).prop_map(|(days, seconds)| {
        let date = NaiveDate::from_num_days_from_ce_opt(days).unwrap();
        let datetime: NaiveDateTime = date
            .and_hms_opt(seconds / 3600, (seconds / 60) % 60, seconds % 60)
            .unwrap();
        Timestamp::new(datetime)
    })
}

fn convention_strategy() -> impl Strategy<Value = DayCountConvention> {
    prop_oneof![
        Just(DayCountConvention::Calendar),
        Just(DayCountConvention::Elapsed)
    ]
}

// ==================== Properties ====================

proptest! {
    #[test]
    fn fractional_part_in_unit_interval(x in -1.0e9f64..1.0e9f64) {
        let fraction = fractional_part(x);
        prop_assert!((0.0..1.0).contains(&fraction), "{} -> {}", x, fraction);
    }

    #[test]
    fn longitude_reduction_in_range(d in -1.0e6f64..1.0e6f64) {
        let longitude = normalize_longitude(raw_longitude(d));
        prop_assert!((0.0..360.0).contains(&longitude), "d={} -> {}", d, longitude);
    }

    #[test]
    fn every_timestamp_has_a_sign(ts in timestamp_strategy(), convention in convention_strategy()) {
        let result = SignCalculator::new(convention).compute(&ts);
        prop_assert!(result.classification.is_recognized(), "{} -> {:?}", ts, result);
        prop_assert!((0.0..1.0).contains(&result.cycle_fraction));
        let sign = result.classification.sign().unwrap();
        prop_assert!(sign.contains(result.longitude.degrees()));
    }

    #[test]
    fn moon_day_in_cycle(ts in timestamp_strategy()) {
        let day = PhaseCalculator::new().days_into_cycle(&ts);
        prop_assert!(day.days() >= 0.0);
        prop_assert!(day.days() < SYNODIC_PERIOD_DAYS);

        let formatted = day.formatted();
        let value: f64 = formatted.parse().unwrap();
        prop_assert!((0.0..=SYNODIC_PERIOD_DAYS).contains(&value));
        let (_, decimals) = formatted.split_once('.').unwrap();
        prop_assert_eq!(decimals.len(), 2);
        prop_assert!(!formatted.starts_with('-'));
    }

    #[test]
    fn calculations_are_deterministic(ts in timestamp_strategy()) {
        let sign = SignCalculator::default();
        let phase = PhaseCalculator::new();

        let first = sign.compute(&ts);
        let second = sign.compute(&ts);
        prop_assert_eq!(first.longitude.degrees().to_bits(), second.longitude.degrees().to_bits());
        prop_assert_eq!(first.classification, second.classification);
        prop_assert_eq!(
            phase.days_into_cycle(&ts).days().to_bits(),
            phase.days_into_cycle(&ts).days().to_bits()
        );
    }

    #[test]
    fn phase_ignores_time_of_day(ts in timestamp_strategy()) {
        let phase = PhaseCalculator::new();
        let midnight = Timestamp::at_midnight(ts.date());
        prop_assert_eq!(phase.format(&ts), phase.format(&midnight));
    }

    #[test]
    fn conventions_agree_from_epoch_onward(ts in timestamp_strategy()) {
        prop_assume!(ts.date() >= SignCalculator::reference_epoch());
        let calendar = SignCalculator::new(DayCountConvention::Calendar);
        let elapsed = SignCalculator::new(DayCountConvention::Elapsed);
        prop_assert_eq!(calendar.day_offset(&ts), elapsed.day_offset(&ts));
    }
}
