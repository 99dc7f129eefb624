use pyo3::prelude::*;

use crate::config::MoonConfig;
use crate::parsing::parse_timestamp;
use crate::services::MoonReport;

fn report_for(date: &str) -> PyResult<MoonReport> {
    let timestamp = parse_timestamp(date)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
    Ok(MoonReport::with_defaults(timestamp))
}

/// Moon sign label for a date-time string (PyO3 binding)
#[pyfunction]
pub fn calculate_sign(date: &str) -> PyResult<String> {
    Ok(report_for(date)?.sign_label)
}

/// Moon day with two decimals for a date-time string (PyO3 binding)
#[pyfunction]
pub fn calculate_phase(date: &str) -> PyResult<String> {
    Ok(report_for(date)?.moon_day_label)
}

/// `(sign_label, moon_day_label)` for a date-time string (PyO3 binding)
///
/// Uses `moon.toml` from the default location when one exists.
#[pyfunction]
pub fn moon_report(date: &str) -> PyResult<(String, String)> {
    let config = MoonConfig::from_default_location_or_default()
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
    let report = MoonReport::from_input(date, &config)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
    Ok((report.sign_label, report.moon_day_label))
}
