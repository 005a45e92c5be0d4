// src/models/state.rs
// DOCUMENTATION: Request lifecycle state
// PURPOSE: Tagged state driving what the view layer renders

use crate::models::Place;

/// State of the single fetch-then-render cycle
/// DOCUMENTATION: Transitions only Idle -> Loading -> Success | Failure;
/// Success and Failure are terminal for a given mount lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    /// Nothing requested yet
    Idle,

    /// Fetch in flight
    Loading,

    /// Fetch and sort completed; holds the ordered places
    Success(Vec<Place>),

    /// Fetch failed; holds the human-readable display message
    Failure(String),
}

impl RequestState {
    /// Whether this state ends the mount lifecycle
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestState::Success(_) | RequestState::Failure(_))
    }

    /// The fetched places, if the request succeeded
    pub fn places(&self) -> Option<&[Place]> {
        match self {
            RequestState::Success(places) => Some(places),
            _ => None,
        }
    }
}
