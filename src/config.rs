//! Configuration management for the `Angkor Guide` application
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::GuideError;
use crate::weather::OPEN_METEO_BASE_URL;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `Angkor Guide` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Day-planner defaults
    #[serde(default)]
    pub planner: PlannerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the weather API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
}

/// Web server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the API server listens on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Day-planner defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Starting latitude when the caller supplies none (town center)
    #[serde(default = "default_start_latitude")]
    pub start_latitude: f64,
    /// Starting longitude when the caller supplies none (town center)
    #[serde(default = "default_start_longitude")]
    pub start_longitude: f64,
    /// Stops per plan unless overridden per request
    #[serde(default = "default_max_stops")]
    pub max_stops: usize,
    /// Reject catalog entries with unparseable schedule text instead of
    /// silently planning around them
    #[serde(default)]
    pub strict_parsing: bool,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    OPEN_METEO_BASE_URL.to_string()
}

fn default_weather_timeout() -> u32 {
    30
}

fn default_server_port() -> u16 {
    8080
}

fn default_start_latitude() -> f64 {
    // Pub Street corner, the de-facto center of town
    13.3545
}

fn default_start_longitude() -> f64 {
    103.8552
}

fn default_max_stops() -> usize {
    crate::planner::DEFAULT_MAX_STOPS
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_seconds: default_weather_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            start_latitude: default_start_latitude(),
            start_longitude: default_start_longitude(),
            max_stops: default_max_stops(),
            strict_parsing: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl GuideConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. ANGKOR_SERVER__PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("ANGKOR")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: GuideConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("angkor-guide").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_coordinates()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds == 0 || self.weather.timeout_seconds > 300 {
            return Err(GuideError::config(
                "Weather API timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if self.planner.max_stops == 0 || self.planner.max_stops > 20 {
            return Err(GuideError::config(
                "Planner max stops must be between 1 and 20",
            )
            .into());
        }

        Ok(())
    }

    /// Validate the default start coordinate
    fn validate_coordinates(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.planner.start_latitude) {
            return Err(GuideError::config(
                "Planner start latitude must be between -90 and 90",
            )
            .into());
        }

        if !(-180.0..=180.0).contains(&self.planner.start_longitude) {
            return Err(GuideError::config(
                "Planner start longitude must be between -180 and 180",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(GuideError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(GuideError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(GuideError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GuideConfig::default();
        assert_eq!(config.weather.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.weather.timeout_seconds, 30);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.planner.max_stops, 6);
        assert!(!config.planner.strict_parsing);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GuideConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let mut config = GuideConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_validation_numeric_ranges() {
        let mut config = GuideConfig::default();
        config.weather.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));

        let mut config = GuideConfig::default();
        config.planner.max_stops = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_coordinates() {
        let mut config = GuideConfig::default();
        config.planner.start_latitude = 95.0;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("latitude"));
    }

    #[test]
    fn test_validation_base_url_scheme() {
        let mut config = GuideConfig::default();
        config.weather.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_sources_deserialize_to_defaults() {
        // No config file and no env vars still yields a full config
        let settings = Config::builder().build().unwrap();
        let config: GuideConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.planner.max_stops, 6);
    }

    #[test]
    fn test_config_path_generation() {
        let path = GuideConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("angkor-guide"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
