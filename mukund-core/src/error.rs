//! Error types for the geospatial core
//!
//! Every failure is reported to the caller. Nothing in the core falls back
//! to a zero distance or a `false` containment result, because either would
//! silently change the safety determination.

use thiserror::Error;

/// Errors produced by the geometry, search and evaluation operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Zone geometry is unusable (too few vertices, nothing to extract)
    #[error("Invalid geometry in zone '{zone}': {reason}")]
    InvalidGeometry { zone: String, reason: String },

    /// A nearest-neighbour search was given nothing to search
    #[error("Empty candidate set: {0}")]
    EmptyCandidateSet(&'static str),

    /// Origin and target coincide, so there is no initial bearing
    #[error("Bearing is undefined between identical points")]
    DegenerateBearing,

    /// Latitude or longitude outside the valid range, or not finite
    #[error("Invalid coordinate: lat {latitude}, lon {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// No zone with this name has been loaded
    #[error("Unknown zone: {0}")]
    UnknownZone(String),

    /// Zone or harbor source text could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl GeoError {
    pub(crate) fn invalid_geometry(zone: impl Into<String>, reason: impl Into<String>) -> Self {
        GeoError::InvalidGeometry {
            zone: zone.into(),
            reason: reason.into(),
        }
    }

    /// Short machine-readable code, stable across releases
    pub fn code(&self) -> &'static str {
        match self {
            GeoError::InvalidGeometry { .. } => "invalid_geometry",
            GeoError::EmptyCandidateSet(_) => "empty_candidate_set",
            GeoError::DegenerateBearing => "degenerate_bearing",
            GeoError::InvalidCoordinate { .. } => "invalid_coordinate",
            GeoError::UnknownZone(_) => "unknown_zone",
            GeoError::Parse(_) => "parse_error",
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GeoError>;
