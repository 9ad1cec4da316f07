//! Latitude/longitude value type

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, Result};

/// A validated geographic position in decimal degrees.
///
/// Latitude is within [-90, 90] and longitude within [-180, 180]. Values are
/// checked on construction and on deserialization, so every `Coordinate` in
/// circulation is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = GeoError;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range or non-finite values
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(GeoError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Coordinate {
            latitude,
            longitude,
        })
    }

    /// Create from a GeoJSON-ordered `[lon, lat]` position
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Result<Self> {
        Coordinate::new(latitude, longitude)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)
    }
}
