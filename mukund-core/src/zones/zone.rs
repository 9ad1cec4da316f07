//! Named zones

use serde::{Deserialize, Serialize};

use super::Polygon;
use crate::geo::Coordinate;

/// What a zone means for a vessel inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    /// Home exclusive economic zone, including island exclaves
    Eez,
    /// Maritime territory of a bordering country
    Danger,
    /// International waters
    HighSeas,
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneKind::Eez => write!(f, "EEZ"),
            ZoneKind::Danger => write!(f, "Danger"),
            ZoneKind::HighSeas => write!(f, "High seas"),
        }
    }
}

/// A named, possibly multi-part, area of one kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub kind: ZoneKind,
    pub parts: Vec<Polygon>,
}

impl Zone {
    pub fn new(name: impl Into<String>, kind: ZoneKind, parts: Vec<Polygon>) -> Self {
        Zone {
            name: name.into(),
            kind,
            parts,
        }
    }

    /// Union semantics: inside if any part contains the point
    pub fn contains(&self, point: Coordinate) -> bool {
        self.parts.iter().any(|p| p.contains(point))
    }

    /// Outer-ring vertices of every part, in source order
    pub fn boundary_vertices(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.parts.iter().flat_map(|p| p.exterior().iter().copied())
    }

    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(|p| p.exterior().len()).sum()
    }
}
