//! Great-circle distance and bearing
//!
//! Thin wrappers over the `geo` crate's haversine algorithms. `geo` points
//! are (x, y) = (longitude, latitude) and distances come back in meters.

use ::geo::{HaversineBearing, HaversineDistance, Point};

use super::Coordinate;
use crate::error::{GeoError, Result};

/// Mean Earth radius in kilometers, as used by `geo`'s haversine
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Points closer than this are the same point for bearing purposes
const COINCIDENT_KM: f64 = 1e-9;

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        Point::new(c.longitude(), c.latitude())
    }
}

/// Haversine distance between two coordinates in kilometers.
///
/// Symmetric and never negative.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let meters = Point::from(a).haversine_distance(&Point::from(b));
    // Rounding near antipodal pairs can leave asin outside its domain
    if meters.is_nan() {
        EARTH_RADIUS_KM * std::f64::consts::PI
    } else {
        meters / 1000.0
    }
}

/// Initial compass bearing from `a` toward `b` in degrees, within [0, 360).
///
/// 0 is north, 90 is east. Fails with [`GeoError::DegenerateBearing`] when the
/// two points coincide, including the two representations of a pole.
pub fn initial_bearing_deg(a: Coordinate, b: Coordinate) -> Result<f64> {
    if distance_km(a, b) < COINCIDENT_KM {
        return Err(GeoError::DegenerateBearing);
    }

    // geo reports (-180, 180]
    let bearing = Point::from(a).haversine_bearing(Point::from(b)).rem_euclid(360.0);
    Ok(if bearing >= 360.0 { 0.0 } else { bearing })
}
