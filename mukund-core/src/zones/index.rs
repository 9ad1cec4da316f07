//! Read-only collection of validated zones

use std::collections::HashMap;

use super::{Zone, ZoneKind};
use crate::error::{GeoError, Result};
use crate::geo::Coordinate;

/// Selects which zones a containment query considers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneSelector {
    /// Every zone of this kind
    Kind(ZoneKind),
    /// The single zone with this name
    Name(String),
}

impl ZoneSelector {
    fn matches(&self, zone: &Zone) -> bool {
        match self {
            ZoneSelector::Kind(kind) => zone.kind == *kind,
            ZoneSelector::Name(name) => zone.name == *name,
        }
    }
}

impl From<ZoneKind> for ZoneSelector {
    fn from(kind: ZoneKind) -> Self {
        ZoneSelector::Kind(kind)
    }
}

/// Zones in load order, looked up by kind or name.
///
/// Construction validates every ring; once built the index is never
/// mutated, so it can be shared across threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct PolygonIndex {
    zones: Vec<Zone>,
    by_name: HashMap<String, usize>,
}

impl PolygonIndex {
    /// Validate and store zones.
    ///
    /// Fails with [`GeoError::InvalidGeometry`] if a zone has no parts, any
    /// ring has fewer than three vertices, or two zones share a name.
    pub fn load(zones: Vec<Zone>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(zones.len());

        for (i, zone) in zones.iter().enumerate() {
            if zone.parts.is_empty() {
                return Err(GeoError::invalid_geometry(&zone.name, "zone has no polygons"));
            }
            for (part, polygon) in zone.parts.iter().enumerate() {
                let len = polygon.min_ring_len();
                if len < 3 {
                    return Err(GeoError::invalid_geometry(
                        &zone.name,
                        format!("polygon {} has a ring with {} vertices", part, len),
                    ));
                }
            }
            if by_name.insert(zone.name.clone(), i).is_some() {
                return Err(GeoError::invalid_geometry(&zone.name, "duplicate zone name"));
            }
        }

        log::debug!(
            "Loaded {} zones with {} boundary vertices",
            zones.len(),
            zones.iter().map(Zone::vertex_count).sum::<usize>()
        );

        Ok(PolygonIndex { zones, by_name })
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn get(&self, name: &str) -> Option<&Zone> {
        self.by_name.get(name).map(|&i| &self.zones[i])
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// True if any part of any selected zone contains the point
    pub fn contains(&self, point: Coordinate, selector: &ZoneSelector) -> bool {
        self.find_containing(point, selector).is_some()
    }

    /// First selected zone, in load order, that contains the point
    pub fn find_containing(&self, point: Coordinate, selector: &ZoneSelector) -> Option<&Zone> {
        match selector {
            ZoneSelector::Name(name) => self.get(name).filter(|z| z.contains(point)),
            ZoneSelector::Kind(_) => self
                .zones
                .iter()
                .filter(|z| selector.matches(z))
                .find(|z| z.contains(point)),
        }
    }

    /// Outer-ring vertices of the named zone, flattened in source order
    pub fn boundary_vertices(&self, name: &str) -> Result<Vec<Coordinate>> {
        let zone = self
            .get(name)
            .ok_or_else(|| GeoError::UnknownZone(name.to_string()))?;
        Ok(zone.boundary_vertices().collect())
    }
}
