//! Fetch-then-persist-then-read-back orchestration and history queries.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;

use skycast_store::{
    Database, NewWeatherRecord, WeatherQuery, WeatherRecord, WeatherSubscription,
};

use crate::client::OpenWeatherClient;
use crate::types::{WeatherError, WeatherResponse, UNKNOWN};

/// Weather service: remote fetch, local persistence, history feeds.
#[derive(Clone)]
pub struct WeatherService {
    client: OpenWeatherClient,
    db: Arc<Mutex<Database>>,
}

impl WeatherService {
    /// Create a service over a shared database handle.
    pub fn new(client: OpenWeatherClient, db: Arc<Mutex<Database>>) -> Self {
        Self { client, db }
    }

    /// Fetch current weather and persist one record for `user_email`.
    ///
    /// Any transport or decode failure propagates and nothing is written.
    pub async fn fetch_and_save(
        &self,
        lat: f64,
        lon: f64,
        user_email: &str,
    ) -> Result<WeatherRecord, WeatherError> {
        let response = self.client.fetch(lat, lon).await?;
        let record = build_record(response, user_email, Utc::now().timestamp_millis());

        let db = self.db.clone();
        let inserted =
            tokio::task::spawn_blocking(move || db.lock().insert_weather(record)).await??;

        Ok(inserted)
    }

    /// Fetch, persist, then read back the most recent record.
    ///
    /// This is the read-through-write-then-read path behind the current
    /// weather screen.
    pub async fn current_weather(
        &self,
        lat: f64,
        lon: f64,
        user_email: &str,
    ) -> Result<Option<WeatherRecord>, WeatherError> {
        self.fetch_and_save(lat, lon, user_email).await?;
        self.latest().await
    }

    /// The most recently created record across all users.
    pub async fn latest(&self) -> Result<Option<WeatherRecord>, WeatherError> {
        let db = self.db.clone();
        let latest = tokio::task::spawn_blocking(move || db.lock().latest_weather()).await??;
        Ok(latest)
    }

    /// Live feed of all records, newest first.
    pub async fn history(&self) -> Result<WeatherSubscription, WeatherError> {
        self.subscribe(WeatherQuery::AllHistory).await
    }

    /// Live feed of one user's records (exact email match), newest first.
    pub async fn history_for_user(
        &self,
        email: &str,
    ) -> Result<WeatherSubscription, WeatherError> {
        self.subscribe(WeatherQuery::HistoryForUser(email.to_string()))
            .await
    }

    async fn subscribe(&self, query: WeatherQuery) -> Result<WeatherSubscription, WeatherError> {
        let db = self.db.clone();
        let subscription = tokio::task::spawn_blocking(move || db.lock().subscribe(query)).await??;
        Ok(subscription)
    }
}

/// Map an upstream response to a record for `user_email`, substituting
/// sentinels for absent data and truncating the temperature toward zero.
fn build_record(response: WeatherResponse, user_email: &str, created_at: i64) -> NewWeatherRecord {
    let first = response.weather.first();
    let condition = first
        .map(|entry| entry.main.clone())
        .unwrap_or_else(|| UNKNOWN.to_string());
    let icon = first.map(|entry| entry.icon.clone()).unwrap_or_default();

    let country = if response.sys.country.is_empty() {
        UNKNOWN.to_string()
    } else {
        response.sys.country
    };

    NewWeatherRecord {
        city: response.name,
        country,
        temperature_celsius: response.main.temp as i32,
        sunrise: response.sys.sunrise,
        sunset: response.sys.sunset,
        condition,
        icon,
        created_at,
        user_email: user_email.to_string(),
    }
}
