//! Weather fetching and history for SkyCast.
//!
//! Provides the OpenWeather-compatible HTTP client, the service that
//! fetches, persists, and reads back weather records, and the location
//! provider boundary.

pub mod client;
pub mod location;
pub mod service;
pub mod types;

pub use client::OpenWeatherClient;
pub use location::{Coordinates, FixedLocation, LocationError, LocationProvider};
pub use service::WeatherService;
pub use types::{WeatherError, WeatherResponse, UNKNOWN};
