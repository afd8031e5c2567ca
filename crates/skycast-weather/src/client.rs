//! HTTP client for the current-weather endpoint.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use skycast_core::WeatherApiConfig;

use crate::types::{WeatherError, WeatherResponse};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for an OpenWeather-compatible endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// Create a client against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against an arbitrary base URL (used by tests).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Create a client from the application config.
    pub fn from_config(config: &WeatherApiConfig) -> Result<Self, WeatherError> {
        Self::with_base_url(&config.api_key, &config.base_url)
    }

    /// Fetch current weather for the given coordinates.
    pub async fn fetch(&self, lat: f64, lon: f64) -> Result<WeatherResponse, WeatherError> {
        tracing::debug!("Fetching weather for ({}, {})", lat, lon);

        let url = format!("{}/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: WeatherResponse = response.json().await?;
        tracing::info!("Fetched weather for {}", payload.name);
        Ok(payload)
    }
}
