//! Persisted record types.

use serde::{Deserialize, Serialize};

/// A registered user account.
///
/// Accounts are created by registration and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email, used as the natural lookup key (case-sensitive).
    pub email: String,
    /// 64-character lowercase hex digest of the password.
    pub password_hash: String,
}

/// A single stored weather observation.
///
/// Immutable once written; history views order these newest-first by
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Store-assigned identifier.
    pub id: i64,
    pub city: String,
    /// Country code, or `"Unknown"` when the upstream source omitted it.
    pub country: String,
    /// Whole degrees Celsius, truncated toward zero from the float source.
    pub temperature_celsius: i32,
    /// Sunrise as epoch seconds.
    pub sunrise: i64,
    /// Sunset as epoch seconds.
    pub sunset: i64,
    /// Condition label, or `"Unknown"` when absent.
    pub condition: String,
    /// Icon reference, empty when absent.
    pub icon: String,
    /// Writer-stamped creation time in epoch milliseconds.
    pub created_at: i64,
    /// Owning user's email; empty when no user was signed in.
    pub user_email: String,
}

/// Fields for a weather record about to be inserted.
///
/// The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewWeatherRecord {
    pub city: String,
    pub country: String,
    pub temperature_celsius: i32,
    pub sunrise: i64,
    pub sunset: i64,
    pub condition: String,
    pub icon: String,
    pub created_at: i64,
    pub user_email: String,
}
