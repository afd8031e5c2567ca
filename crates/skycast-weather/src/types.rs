//! Wire types and errors for the weather service.

use serde::Deserialize;
use thiserror::Error;

use skycast_store::StoreError;

/// Sentinel substituted when upstream data is absent.
pub const UNKNOWN: &str = "Unknown";

/// Response payload from the current-weather endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    /// Location name.
    pub name: String,
    pub sys: SysInfo,
    pub main: MainInfo,
    /// Zero or more condition entries; only the first is used.
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SysInfo {
    /// Country code; may be absent or empty.
    #[serde(default)]
    pub country: String,
    /// Sunrise as epoch seconds.
    pub sunrise: i64,
    /// Sunset as epoch seconds.
    pub sunset: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainInfo {
    /// Temperature in Celsius (float).
    pub temp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionEntry {
    /// Condition label, e.g. "Clear".
    pub main: String,
    /// Icon reference, e.g. "01d".
    #[serde(default)]
    pub icon: String,
}

/// Weather service errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Transport or decode failure talking to the upstream endpoint.
    #[error("Upstream fetch failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Local store failure.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Task scheduling failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WeatherError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::Upstream(_) => {
                "Unable to reach the weather service. Check your connection."
            }
            WeatherError::UpstreamStatus { status, .. } if *status >= 500 => {
                "The weather service is experiencing issues. Please try again later."
            }
            WeatherError::UpstreamStatus { .. } => "Weather request failed. Please try again.",
            WeatherError::Store(e) => e.user_message(),
            WeatherError::Internal(_) => "Something went wrong. Please try again.",
        }
    }
}

impl From<tokio::task::JoinError> for WeatherError {
    fn from(e: tokio::task::JoinError) -> Self {
        WeatherError::Internal(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_response_decodes_full_payload() {
        let body = serde_json::json!({
            "name": "New York",
            "sys": { "country": "US", "sunrise": 1_700_000_000, "sunset": 1_700_040_000 },
            "main": { "temp": 15.5 },
            "weather": [ { "main": "Clear", "icon": "01d" } ]
        });

        let response: WeatherResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.name, "New York");
        assert_eq!(response.sys.country, "US");
        assert_eq!(response.main.temp, 15.5);
        assert_eq!(response.weather[0].main, "Clear");
        assert_eq!(response.weather[0].icon, "01d");
    }

    #[test]
    fn test_response_tolerates_missing_optional_fields() {
        let body = serde_json::json!({
            "name": "Nowhere",
            "sys": { "sunrise": 1, "sunset": 2 },
            "main": { "temp": -3.7 }
        });

        let response: WeatherResponse = serde_json::from_value(body).unwrap();
        assert!(response.sys.country.is_empty());
        assert!(response.weather.is_empty());
    }
}
