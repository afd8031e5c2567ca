//! Local persistence for SkyCast.
//!
//! Provides `Database`, a SQLite store for user accounts and weather
//! records, a live-query registry that fans out history snapshots to
//! subscribers on every write, and a small file-backed preference store.

pub mod db;
pub mod error;
pub mod live;
pub mod prefs;
pub mod types;

pub use db::Database;
pub use error::{StoreError, StoreResult};
pub use live::{WeatherQuery, WeatherSubscription};
pub use prefs::Preferences;
pub use types::{NewWeatherRecord, UserAccount, WeatherRecord};
