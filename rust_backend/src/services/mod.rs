//! Service layer combining the calculators into display-ready results.
//!
//! This is the glue the display shell talks to: it runs both calculators on
//! one timestamp, applies the configured label style and renders the moon
//! day with two decimals.

pub mod report;

pub use report::{generate_reports, MoonReport};
