//! Error types for moon calculations.

/// Result type for fallible moon operations
pub type MoonResult<T> = Result<T, MoonError>;

/// Error type for parsing and configuration.
///
/// The calculators themselves never fail: an unclassifiable longitude is
/// reported as [`SignClassification::Unrecognized`](crate::core::domain::SignClassification).
#[derive(Debug, thiserror::Error)]
pub enum MoonError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<String> for MoonError {
    fn from(s: String) -> Self {
        MoonError::ConfigurationError(s)
    }
}

impl From<&str> for MoonError {
    fn from(s: &str) -> Self {
        MoonError::ConfigurationError(s.to_string())
    }
}
