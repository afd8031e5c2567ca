use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

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

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application data directory (database, preferences)
    pub data_dir: PathBuf,

    /// Weather API settings
    #[serde(default)]
    pub weather_api: WeatherApiConfig,

    /// Fallback location used when no location provider is available
    #[serde(default)]
    pub location: LocationConfig,
}

/// Weather API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// API key for the weather endpoint
    pub api_key: String,

    /// Base URL for the weather endpoint (overridable for testing)
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
}

fn default_api_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

impl WeatherApiConfig {
    /// Check if the API key is configured (not a placeholder)
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.api_key.starts_with("YOUR_")
    }
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            api_key: "YOUR_OPENWEATHER_API_KEY".to_string(),
            base_url: default_api_base_url(),
        }
    }
}

/// Fallback coordinates for headless use
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        // Greenwich
        Self {
            latitude: 51.48,
            longitude: 0.0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skycast");

        Self {
            data_dir,
            weather_api: WeatherApiConfig::default(),
            location: LocationConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns an error if validation fails with critical errors;
    /// warnings are logged and returned alongside the config.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.weather_api.api_key.is_empty() {
            result.add_error("weather_api.api_key", "API key must not be empty");
        } else if !self.weather_api.is_configured() {
            result.add_warning(
                "weather_api.api_key",
                "API key looks like a placeholder; weather requests will fail",
            );
        }

        if self.weather_api.base_url.is_empty() {
            result.add_error("weather_api.base_url", "Base URL must not be empty");
        } else if !self.weather_api.base_url.starts_with("http") {
            result.add_error("weather_api.base_url", "Base URL must be an HTTP(S) URL");
        }

        if !(-90.0..=90.0).contains(&self.location.latitude) {
            result.add_error("location.latitude", "Latitude must be within [-90, 90]");
        }
        if !(-180.0..=180.0).contains(&self.location.longitude) {
            result.add_error("location.longitude", "Longitude must be within [-180, 180]");
        }

        result
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("skycast");
        Ok(config_dir.join("config.toml"))
    }

    /// Path to the SQLite database file
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("skycast.db")
    }

    /// Path to the preferences file
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join("preferences.json")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_default_config_has_placeholder_key() {
        let config = Config::default();
        assert!(!config.weather_api.is_configured());
    }

    #[test]
    fn test_validate_default_config_warns_on_api_key() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.field == "weather_api.api_key"));
    }

    #[test]
    fn test_validate_rejects_empty_api_key() {
        let mut config = Config::default();
        config.weather_api.api_key = String::new();
        let result = config.validate();
        assert!(!result.is_valid());
    }

    #[test]
    fn test_validate_rejects_out_of_range_coordinates() {
        let mut config = Config::default();
        config.location.latitude = 120.0;
        let result = config.validate();
        assert!(result.errors.iter().any(|e| e.field == "location.latitude"));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut config = Config::default();
        config.weather_api.api_key = "abc123".to_string();
        config.location.latitude = 40.71;
        config.location.longitude = -74.0;

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.weather_api.api_key, "abc123");
        assert_eq!(parsed.location.latitude, 40.71);
        assert_eq!(parsed.location.longitude, -74.0);
    }

    #[test]
    fn test_database_path_under_data_dir() {
        let config = Config::default();
        assert!(config.database_path().starts_with(&config.data_dir));
    }
}
