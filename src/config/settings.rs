//! Configuration settings for campuscal.

use crate::error::{ConfigError, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub calendar: CalendarConfig,
    pub parser: ParserConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        let config_paths = [
            PathBuf::from("campuscal.toml"),
            dirs::config_dir()
                .map(|p| p.join("campuscal/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.is_file() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !is_positive(self.calendar.pixels_per_minute) {
            return Err(
                ConfigError::Invalid("calendar.pixels_per_minute must be > 0".to_string()).into(),
            );
        }
        if !is_positive(self.calendar.day_width) {
            return Err(ConfigError::Invalid("calendar.day_width must be > 0".to_string()).into());
        }
        if self.parser.default_duration_minutes == 0 {
            return Err(ConfigError::Invalid(
                "parser.default_duration_minutes must be > 0".to_string(),
            )
            .into());
        }
        if self.parser.title_max_chars == 0 {
            return Err(
                ConfigError::Invalid("parser.title_max_chars must be > 0".to_string()).into(),
            );
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Day-view rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Wall-clock time at the top edge of the day view ("HH:MM").
    #[serde(with = "clock")]
    pub day_start: NaiveTime,
    /// Vertical pixels per minute.
    pub pixels_per_minute: f64,
    /// Horizontal pixels available for one day column.
    pub day_width: f64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            day_start: NaiveTime::from_hms_opt(7, 0, 0).unwrap_or(NaiveTime::MIN),
            pixels_per_minute: 1.0,
            day_width: 320.0,
        }
    }
}

/// Chat message parser configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Start time used when a message carries no time ("HH:MM").
    #[serde(with = "clock")]
    pub default_start: NaiveTime,
    /// Duration for single times and missing times.
    pub default_duration_minutes: u32,
    /// Maximum title length in characters.
    pub title_max_chars: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_start: NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN),
            default_duration_minutes: 60,
            title_max_chars: 100,
        }
    }
}

/// Logging configuration for the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON log lines.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

/// Serde helpers for "HH:MM" clock values.
mod clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|e| serde::de::Error::custom(format!("invalid clock time {raw:?}: {e}")))
    }
}
