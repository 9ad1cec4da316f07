//! Fix Evaluation
//!
//! [`FixEvaluator`] is the entry point used by transports: it bundles the
//! loaded reference data and turns one coordinate into one [`FixResult`].
//!
//! ```text
//!             ┌──────────────► ZoneClassifier ──────────────┐
//! Coordinate ─┤                                             ├─► FixResult
//!             ├─► border vertices ─► nearest ─► bearing ────┤
//!             └─► harbor catalog  ─► nearest ─► bearing ────┘
//! ```
//!
//! An evaluator is immutable once built. Share it behind an `Arc` and
//! replace it wholesale (see [`crate::reference::SharedEvaluator`]) to
//! reload data.

use serde::Serialize;

use crate::classifier::{ClassificationResult, ZoneClassifier};
use crate::error::{GeoError, Result};
use crate::geo::{initial_bearing_deg, Coordinate};
use crate::harbors::HarborCatalog;
use crate::nearest::nearest_point;
use crate::zones::PolygonIndex;

/// Distance and direction from a fix to a point of interest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProximityResult {
    /// Harbor name; absent for border points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub position: Coordinate,
    pub distance_km: f64,
    /// Initial great-circle bearing in degrees, [0, 360)
    pub bearing_deg: f64,
}

/// Everything known about one position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixResult {
    pub position: Coordinate,
    pub classification: ClassificationResult,
    pub nearest_border: ProximityResult,
    pub nearest_harbor: ProximityResult,
}

#[derive(Debug, Clone)]
pub struct FixEvaluator {
    index: PolygonIndex,
    classifier: ZoneClassifier,
    harbors: HarborCatalog,
    border_zone: String,
}

impl FixEvaluator {
    /// Bundle reference data with the default classification rules.
    ///
    /// `border_zone` names the zone whose outer rings are the border. Fails
    /// if that zone is missing or the harbor catalog is empty.
    pub fn new(index: PolygonIndex, harbors: HarborCatalog, border_zone: impl Into<String>) -> Result<Self> {
        FixEvaluator::with_classifier(index, ZoneClassifier::default(), harbors, border_zone)
    }

    pub fn with_classifier(
        index: PolygonIndex,
        classifier: ZoneClassifier,
        harbors: HarborCatalog,
        border_zone: impl Into<String>,
    ) -> Result<Self> {
        let border_zone = border_zone.into();
        if index.get(&border_zone).is_none() {
            return Err(GeoError::UnknownZone(border_zone));
        }
        if harbors.is_empty() {
            return Err(GeoError::EmptyCandidateSet("harbor catalog"));
        }
        Ok(FixEvaluator {
            index,
            classifier,
            harbors,
            border_zone,
        })
    }

    pub fn index(&self) -> &PolygonIndex {
        &self.index
    }

    pub fn harbors(&self) -> &HarborCatalog {
        &self.harbors
    }

    pub fn border_zone(&self) -> &str {
        &self.border_zone
    }

    /// Evaluate a fix against the loaded border zone and harbor catalog
    pub fn evaluate(&self, point: Coordinate) -> Result<FixResult> {
        self.evaluate_with(point, &self.border_zone, &self.harbors)
    }

    /// Evaluate a fix against an explicit border zone and harbor catalog.
    ///
    /// Fails rather than returning a partial result: an empty border
    /// yields [`GeoError::InvalidGeometry`], an empty catalog
    /// [`GeoError::EmptyCandidateSet`], and a fix sitting exactly on the
    /// nearest border vertex or harbor [`GeoError::DegenerateBearing`].
    pub fn evaluate_with(
        &self,
        point: Coordinate,
        border_zone: &str,
        harbors: &HarborCatalog,
    ) -> Result<FixResult> {
        let classification = self.classifier.classify(&self.index, point);

        let vertices = self.index.boundary_vertices(border_zone)?;
        if vertices.is_empty() {
            return Err(GeoError::invalid_geometry(border_zone, "no boundary vertices"));
        }
        let border = nearest_point(point, vertices)?;
        let nearest_border = ProximityResult {
            name: None,
            position: border.position,
            distance_km: border.distance_km,
            bearing_deg: initial_bearing_deg(point, border.position)?,
        };

        let harbor = harbors.nearest(point)?;
        let nearest_harbor = ProximityResult {
            name: Some(harbor.item.name.clone()),
            position: harbor.position,
            distance_km: harbor.distance_km,
            bearing_deg: initial_bearing_deg(point, harbor.position)?,
        };

        log::debug!(
            "{}: {:?}, border {:.2} km @ {:.1}°, harbor {} {:.2} km @ {:.1}°",
            point,
            classification.status,
            nearest_border.distance_km,
            nearest_border.bearing_deg,
            harbor.item.name,
            nearest_harbor.distance_km,
            nearest_harbor.bearing_deg
        );

        Ok(FixResult {
            position: point,
            classification,
            nearest_border,
            nearest_harbor,
        })
    }
}
