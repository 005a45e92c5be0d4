// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Defines all serialization/deserialization models shared with the backend

use serde::{Deserialize, Serialize};

/// Represents a single place record from the backend
/// DOCUMENTATION: Maps directly to the JSON objects inside the `places`
/// array served by GET /places and GET /user-places
/// Immutable once fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Unique identifier (e.g. "p1")
    pub id: String,

    /// Place name - required field for all places
    pub name: String,

    /// Physical street address
    pub address: String,

    /// Display image metadata
    pub image: PlaceImage,

    /// Geographic coordinates - latitude
    pub lat: f64,

    /// Geographic coordinates - longitude
    pub lon: f64,
}

/// Image metadata attached to a place
/// DOCUMENTATION: The backend serves image descriptors, not raw bytes;
/// `src` is resolved against the backend's static image route by the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceImage {
    /// Image file name or URL
    pub src: String,

    /// Alternative text for accessibility
    pub alt: String,
}

/// A geographic position reported by the device
/// DOCUMENTATION: Produced by a position provider, consumed by the
/// distance sorter; mirrors the `coords` object of the sensor API
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_deserializes_from_backend_json() {
        let json = r#"{
            "id": "p1",
            "name": "Forest Waterfall",
            "address": "Deep in the Black Forest, Germany",
            "image": { "src": "forest-waterfall.jpg", "alt": "A tranquil waterfall" },
            "lat": 44.5588,
            "lon": -80.344
        }"#;

        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.id, "p1");
        assert_eq!(place.name, "Forest Waterfall");
        assert_eq!(place.image.src, "forest-waterfall.jpg");
        assert_eq!(place.lat, 44.5588);
        assert_eq!(place.lon, -80.344);
    }

    #[test]
    fn place_roundtrips_through_json() {
        let place = Place {
            id: "p2".to_string(),
            name: "Rocky Coast".to_string(),
            address: "Cliffside Road 7".to_string(),
            image: PlaceImage {
                src: "rocky-coast.jpg".to_string(),
                alt: "Waves crashing on rocks".to_string(),
            },
            lat: 51.123,
            lon: -0.456,
        };

        let json = serde_json::to_string(&place).unwrap();
        let back: Place = serde_json::from_str(&json).unwrap();
        assert_eq!(back, place);
    }

    #[test]
    fn place_rejects_missing_coordinates() {
        let json = r#"{
            "id": "p1",
            "name": "Nowhere",
            "address": "Nowhere Lane",
            "image": { "src": "x.jpg", "alt": "x" }
        }"#;

        let result: Result<Place, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
