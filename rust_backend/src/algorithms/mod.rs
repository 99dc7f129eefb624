//! Moon calculators.
//!
//! # Components
//!
//! - [`sign`]: moon sign from a trigonometric longitude approximation
//! - [`phase`]: days into the synodic cycle from a Julian Day
//!
//! Both calculators are pure: the same [`Timestamp`](crate::core::domain::Timestamp)
//! always yields bit-identical output.
//!
//! # Example
//!
//! ```
//! use moon_rust::algorithms::{PhaseCalculator, SignCalculator};
//! use moon_rust::core::domain::Timestamp;
//!
//! let ts = Timestamp::from_ymd_hms(2000, 1, 21, 0, 0, 0).unwrap();
//! assert_eq!(SignCalculator::default().classify(&ts).label(), "Cancer (Рак)");
//! assert_eq!(PhaseCalculator::new().format(&ts), "16.16");
//! ```

pub mod phase;
pub mod sign;


pub use phase::{PhaseCalculator, NEW_MOON_EPOCH_JD};
pub use sign::{DayCountConvention, SignCalculator, SignComputation};

/// Floor-based fractional part, always in [0, 1).
///
/// `x - x.floor()` rounds up to exactly `1.0` for tiny negative `x`; that
/// case folds back to `0.0`.
pub fn fractional_part(x: f64) -> f64 {
    let fraction = x - x.floor();
    if fraction >= 1.0 {
        0.0
    } else {
        fraction
    }
}
