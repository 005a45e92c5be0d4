// src/services/geo.rs
// DOCUMENTATION: Geographic helpers
// PURPOSE: Distance computation and proximity ordering of places

use crate::models::Place;

/// Calculate distance between two coordinates in kilometers
/// Uses Haversine formula
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + (lat1.to_radians().cos()) * (lat2.to_radians().cos()) * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Order places by proximity to a reference coordinate
/// DOCUMENTATION: Pure function; returns a new vector sorted ascending by
/// great-circle distance from (latitude, longitude) to each place.
/// The sort is stable, so equal-distance entries keep their input order.
/// The input slice is not modified.
pub fn sort_places_by_distance(places: &[Place], latitude: f64, longitude: f64) -> Vec<Place> {
    let mut keyed: Vec<(f64, &Place)> = places
        .iter()
        .map(|place| (distance_km(latitude, longitude, place.lat, place.lon), place))
        .collect();

    // total_cmp keeps the comparator total even for non-finite distances
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    keyed.into_iter().map(|(_, place)| place.clone()).collect()
}
