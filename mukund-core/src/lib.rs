//! Mukund Core - maritime zone classification and proximity engine
//!
//! Platform-independent library that answers one question for a vessel at
//! a single latitude/longitude fix: is it in home waters, in a bordering
//! nation's territory, or on the high seas, and how far (and which way) are
//! the nearest border point and the nearest harbor.
//!
//! # Modules
//!
//! - [`geo`]: coordinates, great-circle distance and bearing
//! - [`zones`]: zone polygons, containment, boundary extraction, GeoJSON
//! - [`nearest`]: linear nearest-neighbour search
//! - [`harbors`]: harbor catalog
//! - [`classifier`]: priority-ordered zone classification
//! - [`evaluator`]: the combined per-fix result
//! - [`reference`]: atomically replaceable evaluator snapshot
//!
//! There is no I/O here. Callers read zone and harbor files themselves and
//! hand the text to [`zones::geojson::parse_polygons`] and
//! [`harbors::HarborCatalog::from_csv`].
//!
//! # Example
//!
//! ```rust
//! use mukund_core::{
//!     Coordinate, FixEvaluator, Harbor, HarborCatalog, Polygon, PolygonIndex, Zone, ZoneKind,
//!     ZoneStatus,
//! };
//!
//! let c = |lat, lon| Coordinate::new(lat, lon).unwrap();
//! let eez = Zone::new(
//!     "eez",
//!     ZoneKind::Eez,
//!     vec![Polygon::new(vec![c(7.0, 78.0), c(7.0, 80.0), c(9.0, 80.0), c(9.0, 78.0)])],
//! );
//! let harbors = HarborCatalog::new(vec![Harbor::new("A", c(8.1, 79.2))]);
//! let evaluator = FixEvaluator::new(PolygonIndex::load(vec![eez]).unwrap(), harbors, "eez").unwrap();
//!
//! let fix = evaluator.evaluate(c(8.3, 79.21)).unwrap();
//! assert_eq!(fix.classification.status, ZoneStatus::SafeEez);
//! assert_eq!(fix.nearest_harbor.name.as_deref(), Some("A"));
//! ```

pub mod classifier;
pub mod error;
pub mod evaluator;
pub mod geo;
pub mod harbors;
pub mod nearest;
pub mod reference;
pub mod zones;

pub use classifier::{ClassificationResult, ClassificationRule, ZoneClassifier, ZoneStatus};
pub use error::{GeoError, Result};
pub use evaluator::{FixEvaluator, FixResult, ProximityResult};
pub use geo::{distance_km, initial_bearing_deg, Coordinate};
pub use harbors::{Harbor, HarborCatalog};
pub use nearest::{nearest, nearest_point, Nearest};
pub use reference::SharedEvaluator;
pub use zones::{Polygon, PolygonIndex, Zone, ZoneKind, ZoneSelector};
