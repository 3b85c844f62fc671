//! Great-circle distance and distance display helpers

use haversine::{Location as HaversineLocation, Units, distance};

/// Distance in kilometers between two coordinates along the Earth's surface.
///
/// Haversine with the mean Earth radius (6371 km). Callers must supply
/// finite inputs; behavior on NaN or infinity is undefined.
#[must_use]
pub fn distance_km(from_lat: f64, from_lng: f64, to_lat: f64, to_lng: f64) -> f64 {
    let from = HaversineLocation {
        latitude: from_lat,
        longitude: from_lng,
    };
    let to = HaversineLocation {
        latitude: to_lat,
        longitude: to_lng,
    };
    distance(from, to, Units::Kilometers)
}

/// Format a distance for display: meters under 1 km, otherwise kilometers.
#[must_use]
pub fn format_distance_km(distance_km: f64) -> String {
    if distance_km < 1.0 {
        return format!("{}m", (distance_km * 1000.0).round() as i64);
    }

    format!("{distance_km:.2}km")
}
