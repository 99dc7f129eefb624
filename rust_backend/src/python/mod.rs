//! Python bindings for the moon calculators.
//!
//! This module exposes the calculators to Python via PyO3. Inputs are
//! date-time strings; parse failures surface as `ValueError`.
//!
//! # Modules
//!
//! - [`moon_bindings`]: `calculate_sign`, `calculate_phase`, `moon_report`

pub mod moon_bindings;

pub use moon_bindings::*;
