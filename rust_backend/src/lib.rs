pub mod algorithms;
pub mod config;
pub mod core;
pub mod error;
pub mod parsing;
pub mod services;
pub mod time;
#[cfg(feature = "python")]
pub mod python;

pub use algorithms::{PhaseCalculator, SignCalculator};
pub use config::MoonConfig;
pub use error::{MoonError, MoonResult};
pub use services::MoonReport;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Moon sign and moon day calculator
#[cfg(feature = "python")]
#[pymodule]
fn moon_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::calculate_sign, m)?)?;
    m.add_function(wrap_pyfunction!(python::calculate_phase, m)?)?;
    m.add_function(wrap_pyfunction!(python::moon_report, m)?)?;

    Ok(())
}
