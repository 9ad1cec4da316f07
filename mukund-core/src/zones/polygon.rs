//! Polygon rings and point containment
//!
//! Containment is delegated to `geo`'s point-in-polygon test in planar
//! longitude/latitude space. A point lying exactly on any ring edge or
//! vertex is *outside*: the boundary does not belong to the interior.
//! Rings that cross the antimeridian must be split before loading.

use ::geo::{Contains, LineString, Point};
use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Axis-aligned box around a ring, used to skip parts cheaply
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    fn around(vertices: &[Coordinate]) -> Option<Self> {
        let first = vertices.first()?;
        let mut bbox = BoundingBox {
            min_lat: first.latitude(),
            max_lat: first.latitude(),
            min_lon: first.longitude(),
            max_lon: first.longitude(),
        };
        for v in &vertices[1..] {
            bbox.min_lat = bbox.min_lat.min(v.latitude());
            bbox.max_lat = bbox.max_lat.max(v.latitude());
            bbox.min_lon = bbox.min_lon.min(v.longitude());
            bbox.max_lon = bbox.max_lon.max(v.longitude());
        }
        Some(bbox)
    }

    /// Inclusive of the edges
    pub fn contains(&self, point: Coordinate) -> bool {
        point.latitude() >= self.min_lat
            && point.latitude() <= self.max_lat
            && point.longitude() >= self.min_lon
            && point.longitude() <= self.max_lon
    }
}

/// One part of a zone: an outer ring with optional holes.
///
/// Rings are stored open. If the source repeats the first vertex at the end
/// (as GeoJSON does), the duplicate is dropped on construction, including
/// when the polygon is deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PolygonRings", into = "PolygonRings")]
pub struct Polygon {
    exterior: Vec<Coordinate>,
    interiors: Vec<Vec<Coordinate>>,
    bbox: Option<BoundingBox>,
    shape: ::geo::Polygon<f64>,
}

/// Serialized form of a [`Polygon`]
#[derive(Serialize, Deserialize)]
struct PolygonRings {
    exterior: Vec<Coordinate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    interiors: Vec<Vec<Coordinate>>,
}

impl From<PolygonRings> for Polygon {
    fn from(rings: PolygonRings) -> Self {
        Polygon::with_holes(rings.exterior, rings.interiors)
    }
}

impl From<Polygon> for PolygonRings {
    fn from(polygon: Polygon) -> Self {
        PolygonRings {
            exterior: polygon.exterior,
            interiors: polygon.interiors,
        }
    }
}

impl Polygon {
    /// Create a polygon without holes
    pub fn new(exterior: Vec<Coordinate>) -> Self {
        Polygon::with_holes(exterior, Vec::new())
    }

    pub fn with_holes(exterior: Vec<Coordinate>, interiors: Vec<Vec<Coordinate>>) -> Self {
        let exterior = open_ring(exterior);
        let interiors: Vec<Vec<Coordinate>> = interiors.into_iter().map(open_ring).collect();
        let bbox = BoundingBox::around(&exterior);
        let shape = ::geo::Polygon::new(
            line_string(&exterior),
            interiors.iter().map(|ring| line_string(ring)).collect(),
        );
        Polygon {
            exterior,
            interiors,
            bbox,
            shape,
        }
    }

    pub fn exterior(&self) -> &[Coordinate] {
        &self.exterior
    }

    pub fn interiors(&self) -> &[Vec<Coordinate>] {
        &self.interiors
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bbox
    }

    /// Smallest vertex count over all rings, used for validation
    pub(crate) fn min_ring_len(&self) -> usize {
        self.interiors
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.exterior.len()))
            .min()
            .unwrap_or(0)
    }

    /// True if the point is strictly inside the outer ring and not inside
    /// or on any hole.
    pub fn contains(&self, point: Coordinate) -> bool {
        match self.bbox {
            Some(bbox) if bbox.contains(point) => self.shape.contains(&Point::from(point)),
            _ => false,
        }
    }
}

fn open_ring(mut ring: Vec<Coordinate>) -> Vec<Coordinate> {
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

/// `geo` closes the ring itself
fn line_string(ring: &[Coordinate]) -> LineString<f64> {
    ring.iter().map(|&c| Point::from(c)).collect()
}
