//! Great-circle distance between coordinate pairs.
//!
//! Straight-line estimate only (ignores roads); the planner uses it for
//! both stop ranking and candidate scoring.

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate haversine distance between two (lat, lng) points in kilometers.
///
/// A coordinate pair that is entirely zero is treated as unresolved and
/// yields a distance of 0. Callers are expected to exclude unplaced stops
/// before asking for distances; this is a fallback, not a validity check.
pub fn distance_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    if is_unresolved(from) || is_unresolved(to) {
        return 0.0;
    }

    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

fn is_unresolved(location: (f64, f64)) -> bool {
    location.0 == 0.0 && location.1 == 0.0
}
