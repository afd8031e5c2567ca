//! Location provider boundary.
//!
//! The core never talks to platform location APIs directly; it consumes a
//! `LocationProvider` that yields coordinates or a typed failure.

use async_trait::async_trait;

use skycast_core::LocationConfig;

/// A (latitude, longitude) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Location provider errors.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Permission Denied")]
    PermissionDenied,
    #[error("GPS is not enabled. Please enable GPS to get location.")]
    GpsDisabled,
    #[error("Location request timed out. Please ensure GPS is enabled and try again.")]
    Timeout,
    #[error("Location not available")]
    Unavailable,
}

/// One-shot location source.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Request the device's current coordinates.
    async fn current_location(&self) -> Result<Coordinates, LocationError>;
}

/// Provider that always yields fixed coordinates.
///
/// Used headless (coordinates from config) and in tests.
#[derive(Debug, Clone)]
pub struct FixedLocation {
    coords: Coordinates,
}

impl FixedLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coords: Coordinates {
                latitude,
                longitude,
            },
        }
    }

    /// Use the fallback coordinates from the application config.
    pub fn from_config(config: &LocationConfig) -> Self {
        Self::new(config.latitude, config.longitude)
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        Ok(self.coords)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[tokio::test]
    async fn test_fixed_location_yields_its_coordinates() {
        let provider = FixedLocation::new(40.71, -74.0);
        let coords = provider.current_location().await.unwrap();
        assert_eq!(coords.latitude, 40.71);
        assert_eq!(coords.longitude, -74.0);
    }

    #[test]
    fn test_error_messages_match_display_strings() {
        assert_eq!(LocationError::PermissionDenied.to_string(), "Permission Denied");
        assert_eq!(LocationError::Unavailable.to_string(), "Location not available");
    }
}
