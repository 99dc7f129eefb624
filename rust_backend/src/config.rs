//! Calculator configuration file support.
//!
//! This module reads calculator settings from TOML configuration files:
//!
//! ```toml
//! [sign]
//! day_count = "calendar"   # or "elapsed"
//!
//! [output]
//! labels = "bilingual"     # or "english"
//! ```
//!
//! Every section and key is optional.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::algorithms::{DayCountConvention, PhaseCalculator, SignCalculator};
use crate::core::domain::LabelStyle;
use crate::error::{MoonError, MoonResult};

/// Calculator configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoonConfig {
    #[serde(default)]
    pub sign: SignSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Moon sign settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignSettings {
    #[serde(default)]
    pub day_count: DayCountConvention,
}

/// Display settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub labels: LabelStyle,
}

impl MoonConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> MoonResult<Self> {
        toml::from_str(content).map_err(|e| {
            MoonError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(MoonConfig)` if successful
    /// * `Err(MoonError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> MoonResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            MoonError::ConfigurationError(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `moon.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> MoonResult<Self> {
        match default_config_path() {
            Some(path) => Self::from_file(path),
            None => Err(MoonError::ConfigurationError(
                "No moon.toml found in standard locations".to_string(),
            )),
        }
    }

    /// Default-location config, or built-in defaults if none is found.
    ///
    /// A config file that exists but fails to parse is still an error.
    pub fn from_default_location_or_default() -> MoonResult<Self> {
        match default_config_path() {
            Some(path) => Self::from_file(path),
            None => {
                log::debug!("No moon.toml found; using default configuration");
                Ok(Self::default())
            }
        }
    }

    pub fn sign_calculator(&self) -> SignCalculator {
        SignCalculator::new(self.sign.day_count)
    }

    pub fn phase_calculator(&self) -> PhaseCalculator {
        PhaseCalculator::new()
    }

    pub fn label_style(&self) -> LabelStyle {
        self.output.labels
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> MoonResult<String> {
        toml::to_string(self)
            .map_err(|e| MoonError::ConfigurationError(format!("Failed to serialize config: {}", e)))
    }
}

fn default_config_path() -> Option<PathBuf> {
    [
        PathBuf::from("moon.toml"),
        PathBuf::from("rust_backend/moon.toml"),
        PathBuf::from("../moon.toml"),
    ]
    .into_iter()
    .find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = MoonConfig::from_toml_str("").unwrap();
        assert_eq!(config, MoonConfig::default());
        assert_eq!(config.sign.day_count, DayCountConvention::Calendar);
        assert_eq!(config.output.labels, LabelStyle::Bilingual);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [sign]
            day_count = "elapsed"

            [output]
            labels = "english"
        "#;

        let config = MoonConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.sign.day_count, DayCountConvention::Elapsed);
        assert_eq!(config.label_style(), LabelStyle::English);
        assert_eq!(config.sign_calculator().day_count(), DayCountConvention::Elapsed);
    }

    #[test]
    fn test_partial_config() {
        let config = MoonConfig::from_toml_str("[output]\nlabels = \"english\"\n").unwrap();
        assert_eq!(config.sign.day_count, DayCountConvention::Calendar);
        assert_eq!(config.output.labels, LabelStyle::English);
    }

    #[test]
    fn test_unknown_value_is_configuration_error() {
        let result = MoonConfig::from_toml_str("[sign]\nday_count = \"julian\"\n");
        assert!(matches!(result, Err(MoonError::ConfigurationError(_))));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = MoonConfig {
            sign: SignSettings {
                day_count: DayCountConvention::Elapsed,
            },
            output: OutputSettings {
                labels: LabelStyle::English,
            },
        };
        let serialized = config.to_toml_string().unwrap();
        assert_eq!(MoonConfig::from_toml_str(&serialized).unwrap(), config);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[sign]\nday_count = \"elapsed\"").unwrap();

        let config = MoonConfig::from_file(file.path()).unwrap();
        assert_eq!(config.sign.day_count, DayCountConvention::Elapsed);
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = MoonConfig::from_file("/nonexistent/moon.toml");
        assert!(matches!(result, Err(MoonError::ConfigurationError(_))));
    }
}
