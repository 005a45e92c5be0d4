// src/services/places_client.rs
// DOCUMENTATION: Places backend client
// PURPOSE: Handle communication with the places backend over HTTP/JSON

use crate::config::Config;
use crate::errors::PlacesError;
use crate::models::Place;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Envelope wrapping both place listing endpoints
/// DOCUMENTATION: GET /places and GET /user-places both respond
/// with `{ "places": [...] }`
#[derive(Debug, Deserialize)]
struct PlacesEnvelope {
    places: Vec<Place>,
}

/// Request body for PUT /user-places
#[derive(Debug, Serialize)]
struct UpdateUserPlacesRequest<'a> {
    places: &'a [Place],
}

/// Response body for PUT /user-places
#[derive(Debug, Deserialize)]
struct UpdateUserPlacesResponse {
    message: String,
}

/// Places backend API client
/// DOCUMENTATION: Thin wrapper over reqwest; one network round trip per
/// call, no retries, no explicit timeout (transport default applies)
#[derive(Debug, Clone)]
pub struct PlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Base URL of the backend (no trailing slash)
    base_url: String,
}

impl PlacesClient {
    /// Create new places client
    /// DOCUMENTATION: Initializes client against the given base URL;
    /// a trailing slash is stripped so path concatenation stays uniform
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_base_url)
    }

    /// Get configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all available places
    /// DOCUMENTATION: GET /places
    ///
    /// # Returns
    /// The `places` array from the response body
    pub async fn fetch_available_places(&self) -> Result<Vec<Place>, PlacesError> {
        self.fetch_places_from("/places", "Failed to fetch places")
            .await
    }

    /// Fetch the places the user has saved
    /// DOCUMENTATION: GET /user-places
    ///
    /// # Returns
    /// The `places` array from the response body
    pub async fn fetch_user_places(&self) -> Result<Vec<Place>, PlacesError> {
        self.fetch_places_from("/user-places", "Failed to fetch user places")
            .await
    }

    /// Persist an updated set of user places
    /// DOCUMENTATION: PUT /user-places with a JSON body `{ "places": [...] }`
    ///
    /// # Arguments
    /// * `places` - The full saved list to replace the backend's copy with
    ///
    /// # Returns
    /// The server's confirmation message string
    pub async fn update_user_places(&self, places: &[Place]) -> Result<String, PlacesError> {
        let url = format!("{}/user-places", self.base_url);

        log::debug!("Updating {} user places at {}", places.len(), url);

        let response = self
            .client
            .put(&url)
            .json(&UpdateUserPlacesRequest { places })
            .send()
            .await?;

        if !response.status().is_success() {
            log::error!("Places API error {} for PUT {}", response.status(), url);
            return Err(PlacesError::Network("Failed to update user data.".to_string()));
        }

        let body: UpdateUserPlacesResponse = response.json().await?;
        Ok(body.message)
    }

    /// Shared GET path for the two listing endpoints
    /// DOCUMENTATION: A non-2xx status maps to the endpoint's fixed display
    /// message; transport and decode failures keep the underlying error
    async fn fetch_places_from(
        &self,
        path: &str,
        failure_message: &str,
    ) -> Result<Vec<Place>, PlacesError> {
        let url = format!("{}{}", self.base_url, path);

        log::debug!("Fetching places from {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            log::error!("Places API error {} for GET {}", response.status(), url);
            return Err(PlacesError::Network(failure_message.to_string()));
        }

        let envelope: PlacesEnvelope = response.json().await?;

        log::debug!("Received {} places from {}", envelope.places.len(), path);
        Ok(envelope.places)
    }
}
