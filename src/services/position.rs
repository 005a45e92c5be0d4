// src/services/position.rs
// DOCUMENTATION: Device position access
// PURPOSE: Abstract the geolocation sensor behind an injectable capability

use crate::config::Config;
use crate::errors::PlacesError;
use crate::models::Coordinate;
use async_trait::async_trait;

/// Source of the device's current position
/// DOCUMENTATION: Single-shot read, not continuous tracking; injected into
/// the fetch orchestrator so tests can supply deterministic positions
#[async_trait]
pub trait PositionProvider {
    /// Resolve the current device position
    async fn current_position(&self) -> Result<Coordinate, PlacesError>;
}

/// Position provider backed by configuration
/// DOCUMENTATION: The CLI has no geolocation sensor, so the device position
/// comes from DEVICE_LATITUDE/DEVICE_LONGITUDE
#[derive(Debug, Clone)]
pub struct ConfiguredPosition {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl ConfiguredPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            latitude: config.device_latitude,
            longitude: config.device_longitude,
        }
    }
}

#[async_trait]
impl PositionProvider for ConfiguredPosition {
    async fn current_position(&self) -> Result<Coordinate, PlacesError> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => {
                log::debug!("Device position: lat={}, lon={}", latitude, longitude);
                Ok(Coordinate {
                    latitude,
                    longitude,
                })
            }
            _ => Err(PlacesError::Geolocation(
                "device position is not configured".to_string(),
            )),
        }
    }
}
