//! Zone Geometry
//!
//! Named maritime zones, each made of one or more polygon parts, and the
//! [`PolygonIndex`] that answers containment and boundary queries over them.
//!
//! # Features
//!
//! - Multi-part zones with union containment semantics
//! - Polygon holes (interior rings)
//! - Lookup by zone kind or zone name
//! - Boundary extraction as an ordered vertex cloud
//! - GeoJSON parsing of `Polygon` / `MultiPolygon` sources
//!
//! # Example
//!
//! ```rust
//! use mukund_core::geo::Coordinate;
//! use mukund_core::zones::{Polygon, PolygonIndex, Zone, ZoneKind, ZoneSelector};
//!
//! let c = |lat, lon| Coordinate::new(lat, lon).unwrap();
//! let eez = Zone::new(
//!     "EEZ",
//!     ZoneKind::Eez,
//!     vec![Polygon::new(vec![c(0.0, 0.0), c(0.0, 10.0), c(10.0, 10.0), c(10.0, 0.0)])],
//! );
//! let index = PolygonIndex::load(vec![eez]).unwrap();
//!
//! assert!(index.contains(c(5.0, 5.0), &ZoneSelector::Name("EEZ".into())));
//! assert!(!index.contains(c(-1.0, -1.0), &ZoneSelector::Kind(ZoneKind::Eez)));
//! ```

pub mod geojson;
mod index;
mod polygon;
mod zone;

pub use index::{PolygonIndex, ZoneSelector};
pub use polygon::{BoundingBox, Polygon};
pub use zone::{Zone, ZoneKind};
