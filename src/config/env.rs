// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the places backend (default http://localhost:3000)
    pub api_base_url: String,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Fixed device latitude (stand-in for a geolocation sensor)
    pub device_latitude: Option<f64>,

    /// Fixed device longitude (stand-in for a geolocation sensor)
    pub device_longitude: Option<f64>,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env.local or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        Config {
            api_base_url: env::var("PLACES_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            device_latitude: env::var("DEVICE_LATITUDE")
                .ok()
                .and_then(|v| v.parse().ok()),

            device_longitude: env::var("DEVICE_LONGITUDE")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.is_empty() {
            return Err("PLACES_API_URL is required".to_string());
        }

        if self.device_latitude.is_none() || self.device_longitude.is_none() {
            log::warn!(
                "DEVICE_LATITUDE/DEVICE_LONGITUDE not configured - nearby sorting will be unavailable"
            );
        }

        Ok(())
    }
}
