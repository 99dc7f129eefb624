//! Core domain models for moon calculations.
//!
//! This module defines the value types shared by the calculators, the report
//! service and the bindings: the input timestamp, the zodiac bands and the
//! two derived lunar quantities.

pub mod domain;


pub use domain::{LabelStyle, LunarCycleDay, LunarLongitude, SignClassification, Timestamp, ZodiacSign};
