//! Integration tests for the weather service using wiremock.
//!
//! These verify the full fetch → persist → read-back path against a mock
//! HTTP endpoint and an in-memory database.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use parking_lot::Mutex;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skycast_store::Database;
use skycast_weather::{OpenWeatherClient, WeatherError, WeatherService, UNKNOWN};

fn weather_body(
    city: &str,
    country: &str,
    temp: f64,
    conditions: &[(&str, &str)],
) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = conditions
        .iter()
        .map(|(main, icon)| serde_json::json!({ "main": main, "icon": icon }))
        .collect();

    serde_json::json!({
        "name": city,
        "sys": { "country": country, "sunrise": 1_700_000_000, "sunset": 1_700_040_000 },
        "main": { "temp": temp },
        "weather": entries
    })
}

async fn create_service(server: &MockServer) -> (WeatherService, Arc<Mutex<Database>>) {
    let db = Arc::new(Mutex::new(
        Database::in_memory().expect("Failed to create in-memory database"),
    ));
    let client = OpenWeatherClient::with_base_url("test-key", server.uri()).unwrap();
    (WeatherService::new(client, db.clone()), db)
}

#[tokio::test]
async fn test_fetch_and_save_persists_mapped_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(weather_body("New York", "US", 15.5, &[("Clear", "01d")])),
        )
        .mount(&server)
        .await;

    let (service, db) = create_service(&server).await;

    let record = service.fetch_and_save(40.71, -74.0, "ann@x.com").await.unwrap();

    assert_eq!(record.city, "New York");
    assert_eq!(record.country, "US");
    assert_eq!(record.condition, "Clear");
    assert_eq!(record.icon, "01d");
    assert_eq!(record.temperature_celsius, 15);
    assert_eq!(record.sunrise, 1_700_000_000);
    assert_eq!(record.sunset, 1_700_040_000);
    assert_eq!(record.user_email, "ann@x.com");
    assert!(record.created_at > 0);

    let stored = db.lock().weather_history().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], record);
}

#[tokio::test]
async fn test_fetch_and_save_substitutes_sentinels() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(weather_body("Nowhere", "", 10.0, &[])),
        )
        .mount(&server)
        .await;

    let (service, _db) = create_service(&server).await;

    let record = service.fetch_and_save(0.0, 0.0, "ann@x.com").await.unwrap();

    assert_eq!(record.condition, UNKNOWN);
    assert_eq!(record.icon, "");
    assert_eq!(record.country, UNKNOWN);
}

#[tokio::test]
async fn test_upstream_failure_writes_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let (service, db) = create_service(&server).await;

    let result = service.fetch_and_save(40.71, -74.0, "ann@x.com").await;
    assert!(matches!(
        result,
        Err(WeatherError::UpstreamStatus { status: 500, .. })
    ));

    assert!(db.lock().weather_history().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_payload_writes_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let (service, db) = create_service(&server).await;

    let result = service.fetch_and_save(40.71, -74.0, "ann@x.com").await;
    assert!(matches!(result, Err(WeatherError::Upstream(_))));
    assert!(db.lock().weather_history().unwrap().is_empty());
}

#[tokio::test]
async fn test_current_weather_reads_back_latest() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(weather_body("Oslo", "NO", -3.7, &[("Snow", "13d")])),
        )
        .mount(&server)
        .await;

    let (service, _db) = create_service(&server).await;

    let current = service.current_weather(59.91, 10.75, "ann@x.com").await.unwrap();
    let current = current.unwrap();

    assert_eq!(current.city, "Oslo");
    // Truncation toward zero.
    assert_eq!(current.temperature_celsius, -3);
}

#[tokio::test]
async fn test_history_subscription_observes_fetches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(weather_body("London", "GB", 12.0, &[("Rain", "10d")])),
        )
        .mount(&server)
        .await;

    let (service, _db) = create_service(&server).await;

    let mut all = service.history().await.unwrap();
    let mut ann = service.history_for_user("ann@x.com").await.unwrap();
    let mut bob = service.history_for_user("bob@x.com").await.unwrap();

    // Initial snapshots are empty.
    assert!(all.next().await.unwrap().is_empty());
    assert!(ann.next().await.unwrap().is_empty());
    assert!(bob.next().await.unwrap().is_empty());

    service.fetch_and_save(51.5, -0.12, "ann@x.com").await.unwrap();

    let all_set = all.next().await.unwrap();
    assert_eq!(all_set.len(), 1);
    assert_eq!(all_set[0].city, "London");

    let ann_set = ann.next().await.unwrap();
    assert_eq!(ann_set.len(), 1);
    assert_eq!(ann_set[0].user_email, "ann@x.com");

    // The other user's feed re-emits its (still empty) result set.
    assert!(bob.next().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_latest_with_empty_store() {
    let server = MockServer::start().await;
    let (service, _db) = create_service(&server).await;

    assert!(service.latest().await.unwrap().is_none());
}
