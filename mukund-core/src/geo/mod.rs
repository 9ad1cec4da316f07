//! Geographic Primitives
//!
//! Coordinates and great-circle math shared by every other module.
//!
//! # Earth model
//!
//! Distances use the haversine formula on a sphere with the IUGG mean
//! radius ([`EARTH_RADIUS_KM`]). Bearings use the spherical forward azimuth.
//! Both are pure functions with no state.
//!
//! # Example
//!
//! ```rust
//! use mukund_core::geo::{distance_km, initial_bearing_deg, Coordinate};
//!
//! let colombo = Coordinate::new(6.93, 79.85).unwrap();
//! let rameswaram = Coordinate::new(9.28, 79.31).unwrap();
//!
//! let km = distance_km(colombo, rameswaram);
//! let bearing = initial_bearing_deg(colombo, rameswaram).unwrap();
//! assert!(km > 250.0 && km < 280.0);
//! assert!(bearing > 340.0);
//! ```

mod coordinate;
mod great_circle;

pub use coordinate::Coordinate;
pub use great_circle::{distance_km, initial_bearing_deg, EARTH_RADIUS_KM};
