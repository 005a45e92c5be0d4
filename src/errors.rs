// src/errors.rs
// DOCUMENTATION: Custom error types
// PURPOSE: Centralized error handling for entire application

use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Comprehensive error enum for all possible failures
/// Network rejections carry the user-facing message the UI displays verbatim;
/// every other variant maps to the generic fallback message at the view layer
#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("{0}")]
    Network(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Position unavailable: {0}")]
    Geolocation(String),

    #[error("Place not found with id: {0}")]
    NotFound(String),
}

impl PlacesError {
    /// Message suitable for direct display in the UI
    /// DOCUMENTATION: Only server rejections carry a display message;
    /// transport and sensor failures have none and the caller substitutes
    /// its own fallback text
    pub fn user_message(&self) -> Option<&str> {
        match self {
            PlacesError::Network(message) => Some(message),
            _ => None,
        }
    }
}
