//! Core library for SkyCast.
//!
//! Provides configuration loading/validation and tracing initialization
//! shared by the store, auth, and weather crates.

pub mod config;

pub use config::{Config, ConfigValidationError, LocationConfig, ValidationResult, WeatherApiConfig};

use anyhow::Result;

/// Initialize tracing for the application.
///
/// Respects `RUST_LOG`; defaults to `info` when unset.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("SkyCast core initialized");
    Ok(())
}
