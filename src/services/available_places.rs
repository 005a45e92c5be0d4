// src/services/available_places.rs
// DOCUMENTATION: Fetch orchestrator for the available-places screen
// PURPOSE: Drive the fetch -> position -> sort cycle and its render states

use crate::errors::PlacesError;
use crate::models::{Place, RequestState};
use crate::services::geo;
use crate::services::places_client::PlacesClient;
use crate::services::position::PositionProvider;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Heading shown above the place list
pub const PLACES_TITLE: &str = "Available Places";

/// Text shown while the fetch is in flight
pub const LOADING_TEXT: &str = "Fetching place data...";

/// Title of the error view
pub const ERROR_TITLE: &str = "An error occured!";

/// Text shown when the backend has no places
pub const FALLBACK_TEXT: &str = "No places available.";

/// Display message used when a failure carries no message of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "Could not fetch places, please try again later.";

/// Cloneable unmount signal for a mounted screen
/// DOCUMENTATION: Once flagged, the orchestrator stops writing state, so a
/// fetch that settles after the view is gone cannot touch a destroyed view.
/// In-flight I/O itself is not cancelled.
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    unmounted: Arc<AtomicBool>,
}

impl Lifecycle {
    /// Signal that the owning view has been destroyed
    pub fn unmount(&self) {
        self.unmounted.store(true, Ordering::SeqCst);
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmounted.load(Ordering::SeqCst)
    }
}

/// Controller for the available-places screen
/// DOCUMENTATION: State machine over RequestState; fetches the place list,
/// resolves the device position, sorts by proximity, and exposes the result
/// through a render contract. The fetch fires exactly once per mount.
pub struct AvailablePlaces<P> {
    /// Backend client
    client: PlacesClient,
    /// Injected geolocation capability
    positions: P,
    /// Unmount signal shared with the owning view
    lifecycle: Lifecycle,
    /// Current request state
    state: RequestState,
}

impl<P: PositionProvider> AvailablePlaces<P> {
    pub fn new(client: PlacesClient, positions: P) -> Self {
        Self {
            client,
            positions,
            lifecycle: Lifecycle::default(),
            state: RequestState::Idle,
        }
    }

    /// Handle for signalling unmount from outside the controller
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.clone()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Lifecycle hook fired when the screen is first displayed
    /// DOCUMENTATION: Transitions Idle -> Loading and reports whether the
    /// fetch should run. Any repeat call is a no-op returning false, which
    /// is what guarantees a single fetch per mount lifecycle.
    pub fn on_mount(&mut self) -> bool {
        if !matches!(self.state, RequestState::Idle) {
            log::debug!("Ignoring repeat mount; fetch already triggered");
            return false;
        }

        self.state = RequestState::Loading;
        true
    }

    /// Run the fetch -> position -> sort cycle to completion
    /// DOCUMENTATION: Valid only in the Loading state. On success transitions
    /// to Success with the proximity-ordered places; on any failure (network,
    /// transport, or position) transitions to Failure with a display message.
    /// If the view unmounted while suspended, the result is dropped and the
    /// state left untouched.
    pub async fn load(&mut self) {
        if !matches!(self.state, RequestState::Loading) {
            log::debug!("load called outside the Loading state; ignoring");
            return;
        }

        let outcome = self.fetch_sorted_places().await;

        if self.lifecycle.is_unmounted() {
            log::debug!("View unmounted before the fetch settled; dropping result");
            return;
        }

        self.state = match outcome {
            Ok(places) => {
                log::info!("Loaded {} available places", places.len());
                RequestState::Success(places)
            }
            Err(err) => {
                log::error!("Failed to load available places: {}", err);
                let message = err
                    .user_message()
                    .unwrap_or(FALLBACK_ERROR_MESSAGE)
                    .to_string();
                RequestState::Failure(message)
            }
        };
    }

    /// Convenience wrapper: on_mount followed by load
    pub async fn mount(&mut self) {
        if self.on_mount() {
            self.load().await;
        }
    }

    /// Current view per the rendering contract
    pub fn render(&self) -> PlacesView<'_> {
        PlacesView::from_state(&self.state)
    }

    async fn fetch_sorted_places(&self) -> Result<Vec<Place>, PlacesError> {
        let places = self.client.fetch_available_places().await?;
        let position = self.positions.current_position().await?;

        Ok(geo::sort_places_by_distance(
            &places,
            position.latitude,
            position.longitude,
        ))
    }
}

/// What the UI collaborator should display
/// DOCUMENTATION: Pure mapping from RequestState; the crate does no
/// rendering itself beyond the CLI's plain-text printer
#[derive(Debug, PartialEq)]
pub enum PlacesView<'a> {
    /// Loading indicator with fixed text
    Loading { text: &'static str },

    /// Error view with fixed title and the failure message
    Error {
        title: &'static str,
        message: &'a str,
    },

    /// Fixed no-data message
    Fallback { text: &'static str },

    /// The ordered place list
    List {
        title: &'static str,
        places: &'a [Place],
    },
}

impl<'a> PlacesView<'a> {
    /// Map a request state to its view
    /// DOCUMENTATION: Idle and an empty Success both fall back to the
    /// no-data message; only a non-empty Success renders the list
    pub fn from_state(state: &'a RequestState) -> Self {
        match state {
            RequestState::Loading => PlacesView::Loading { text: LOADING_TEXT },
            RequestState::Failure(message) => PlacesView::Error {
                title: ERROR_TITLE,
                message,
            },
            RequestState::Success(places) if !places.is_empty() => PlacesView::List {
                title: PLACES_TITLE,
                places,
            },
            RequestState::Success(_) | RequestState::Idle => {
                PlacesView::Fallback { text: FALLBACK_TEXT }
            }
        }
    }
}
