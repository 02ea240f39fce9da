use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

/// Open-Meteo forecast endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Example coordinates (New York City).
pub const DEFAULT_LATITUDE: f64 = 40.71;
pub const DEFAULT_LONGITUDE: f64 = -74.01;

/// Environment variable that overrides `weather.api_base_url`.
pub const API_URL_ENV: &str = "METEOVIEW_API_URL";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Forecast source and location
    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base forecast endpoint; query parameters are appended to it
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// Request timeout in seconds. Unset means wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_latitude() -> f64 {
    DEFAULT_LATITUDE
}

fn default_longitude() -> f64 {
    DEFAULT_LONGITUDE
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load configuration from the user config directory.
    ///
    /// A missing file is not an error: the defaults are used and nothing is
    /// written back. `METEOVIEW_API_URL` overrides the endpoint either way.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_api_url_override(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    /// Load configuration from an explicit TOML file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!("Loading config from {}", path.display());

        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Unreadable(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load configuration and validate it
    ///
    /// Warnings are logged; errors fail the load.
    pub fn load_validated() -> Result<Self, ConfigError> {
        Self::load()?.into_validated()
    }

    /// Validate an already-loaded configuration, keeping it only if valid.
    pub fn into_validated(self) -> Result<Self, ConfigError> {
        let validation = self.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()));
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok(self)
    }

    /// Replace the endpoint when an override is present and non-empty.
    pub fn apply_api_url_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            tracing::info!("Using forecast endpoint from {}: {}", API_URL_ENV, url);
            self.weather.api_base_url = url;
        }
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(
            &self.weather.api_base_url,
            "weather.api_base_url",
            &mut result,
        );

        let lat = self.weather.latitude;
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            result.add_error(
                "weather.latitude",
                format!("Latitude must be between -90 and 90, got: {}", lat),
            );
        }

        let lon = self.weather.longitude;
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            result.add_error(
                "weather.longitude",
                format!("Longitude must be between -180 and 180, got: {}", lon),
            );
        }

        if self.weather.request_timeout_secs == Some(0) {
            result.add_warning(
                "weather.request_timeout_secs",
                "Timeout of 0 seconds is ignored; requests wait indefinitely",
            );
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }

                if url.query().is_some() {
                    result.add_warning(
                        field_name,
                        "URL already has a query string; request parameters are appended to it",
                    );
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("meteoview").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_default_coordinate() {
        let config = Config::default();
        assert_eq!(config.weather.latitude, 40.71);
        assert_eq!(config.weather.longitude, -74.01);
        assert_eq!(config.weather.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.weather.request_timeout_secs.is_none());
    }

    #[test]
    fn test_invalid_url() {
        let mut config = Config::default();
        config.weather.api_base_url = "not-a-url".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "weather.api_base_url"));
    }

    #[test]
    fn test_invalid_url_scheme() {
        let mut config = Config::default();
        config.weather.api_base_url = "ftp://localhost:8080".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.message.contains("http or https")));
    }

    #[test]
    fn test_out_of_range_coordinate() {
        let mut config = Config::default();
        config.weather.latitude = 91.0;
        config.weather.longitude = -181.0;
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "weather.latitude"));
        assert!(result.errors.iter().any(|e| e.field == "weather.longitude"));
    }

    #[test]
    fn test_zero_timeout_is_warning() {
        let mut config = Config::default();
        config.weather.request_timeout_secs = Some(0);
        let result = config.validate();
        assert!(result.is_valid());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.field == "weather.request_timeout_secs"));
    }

    #[test]
    fn test_api_url_override() {
        let mut config = Config::default();
        config.apply_api_url_override(Some("http://127.0.0.1:9000/v1/forecast".into()));
        assert_eq!(config.weather.api_base_url, "http://127.0.0.1:9000/v1/forecast");
    }

    #[test]
    fn test_blank_api_url_override_ignored() {
        let mut config = Config::default();
        config.apply_api_url_override(Some("   ".into()));
        config.apply_api_url_override(None);
        assert_eq!(config.weather.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_into_validated_rejects_invalid() {
        let mut config = Config::default();
        config.weather.latitude = 120.0;
        let err = config.into_validated().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("weather.latitude")));
    }

    #[test]
    fn test_into_validated_keeps_config_with_warnings() {
        let mut config = Config::default();
        config.weather.request_timeout_secs = Some(0);
        let config = config.into_validated().unwrap();
        assert_eq!(config.weather.request_timeout_secs, Some(0));
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        let summary = result.error_summary();
        assert_eq!(summary, "field1: error1; field2: error2");
    }
}
