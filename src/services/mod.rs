// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod available_places;
pub mod geo;
pub mod places_client;
pub mod position;

pub use available_places::*;
pub use geo::*;
pub use places_client::*;
pub use position::*;
