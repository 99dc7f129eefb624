use serde::Serialize;

use crate::config::MoonConfig;
use crate::core::domain::{LabelStyle, SignClassification, Timestamp};
use crate::error::MoonResult;
use crate::parsing::parse_timestamp;

/// Both derived values for one timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoonReport {
    pub timestamp: Timestamp,
    pub sign: SignClassification,
    /// Sign label in the configured style.
    pub sign_label: String,
    /// Lunar longitude in degrees, [0, 360).
    pub longitude: f64,
    /// Days into the synodic cycle, [0, 29.53).
    pub moon_day: f64,
    /// `moon_day` with exactly two decimals.
    pub moon_day_label: String,
}

impl MoonReport {
    pub fn for_timestamp(timestamp: Timestamp, config: &MoonConfig) -> Self {
        let sign = config.sign_calculator().compute(&timestamp);
        let moon_day = config.phase_calculator().days_into_cycle(&timestamp);

        Self {
            timestamp,
            sign: sign.classification,
            sign_label: sign.classification.label_with(config.label_style()).to_string(),
            longitude: sign.longitude.degrees(),
            moon_day: moon_day.days(),
            moon_day_label: moon_day.formatted(),
        }
    }

    /// Parse `input` and build its report.
    pub fn from_input(input: &str, config: &MoonConfig) -> MoonResult<Self> {
        let timestamp = parse_timestamp(input)?;
        Ok(Self::for_timestamp(timestamp, config))
    }

    /// Report with the built-in configuration.
    pub fn with_defaults(timestamp: Timestamp) -> Self {
        Self::for_timestamp(timestamp, &MoonConfig::default())
    }

    pub fn sign_label(&self) -> &str {
        &self.sign_label
    }

    pub fn moon_day_label(&self) -> &str {
        &self.moon_day_label
    }

    /// Re-render the sign label in another style.
    pub fn sign_label_with(&self, style: LabelStyle) -> &'static str {
        self.sign.label_with(style)
    }

    /// The two lines shown to the user.
    pub fn display_lines(&self) -> [String; 2] {
        [
            format!("Moon Sign is {}", self.sign_label),
            format!("Moon Day is {}", self.moon_day_label),
        ]
    }
}

/// Reports for many timestamps under one configuration.
pub fn generate_reports(timestamps: &[Timestamp], config: &MoonConfig) -> Vec<MoonReport> {
    timestamps
        .iter()
        .map(|ts| MoonReport::for_timestamp(*ts, config))
        .collect()
}
