//! Zone Classification
//!
//! Maps a coordinate to a maritime status by running an ordered list of
//! rules against the [`PolygonIndex`]. The first rule whose zones contain
//! the point decides the status; zones overlap at their borders, so the
//! order is part of the contract.
//!
//! | Priority | Zones           | Status          | Safe  |
//! |----------|-----------------|-----------------|-------|
//! | 1        | EEZ + exclaves  | `SafeEez`       | yes   |
//! | 2        | Danger          | `Danger`        | no    |
//! | 3        | High seas       | `SafeHighSeas`  | yes   |
//! | -        | nothing matched | `Unknown`       | no    |

use serde::Serialize;

use crate::geo::Coordinate;
use crate::zones::{PolygonIndex, ZoneKind, ZoneSelector};

/// Maritime status of a fix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneStatus {
    SafeEez,
    Danger,
    SafeHighSeas,
    Unknown,
}

impl ZoneStatus {
    /// Unknown is deliberately not safe
    pub fn is_safe(&self) -> bool {
        matches!(self, ZoneStatus::SafeEez | ZoneStatus::SafeHighSeas)
    }

    pub fn message(&self) -> &'static str {
        match self {
            ZoneStatus::SafeEez => "You are in the EEZ (safe zone).",
            ZoneStatus::Danger => "Warning: You are in a danger zone.",
            ZoneStatus::SafeHighSeas => "You are in the high seas (safe zone).",
            ZoneStatus::Unknown => "Warning: Your location is unknown or not in a safe zone.",
        }
    }
}

/// One step of the priority list
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationRule {
    pub selector: ZoneSelector,
    pub status: ZoneStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub status: ZoneStatus,
    pub message: &'static str,
    pub safe: bool,
    /// Kind of the zone that matched, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_kind: Option<ZoneKind>,
    /// Name of the zone that matched, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
}

impl ClassificationResult {
    fn unknown() -> Self {
        ClassificationResult {
            status: ZoneStatus::Unknown,
            message: ZoneStatus::Unknown.message(),
            safe: false,
            zone_kind: None,
            zone: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneClassifier {
    rules: Vec<ClassificationRule>,
}

impl Default for ZoneClassifier {
    fn default() -> Self {
        ZoneClassifier::new(vec![
            ClassificationRule {
                selector: ZoneSelector::Kind(ZoneKind::Eez),
                status: ZoneStatus::SafeEez,
            },
            ClassificationRule {
                selector: ZoneSelector::Kind(ZoneKind::Danger),
                status: ZoneStatus::Danger,
            },
            ClassificationRule {
                selector: ZoneSelector::Kind(ZoneKind::HighSeas),
                status: ZoneStatus::SafeHighSeas,
            },
        ])
    }
}

impl ZoneClassifier {
    /// Build a classifier from rules in priority order
    pub fn new(rules: Vec<ClassificationRule>) -> Self {
        ZoneClassifier { rules }
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Classify a point, first matching rule wins
    pub fn classify(&self, index: &PolygonIndex, point: Coordinate) -> ClassificationResult {
        for rule in &self.rules {
            if let Some(zone) = index.find_containing(point, &rule.selector) {
                log::debug!("{} is in zone '{}' ({:?})", point, zone.name, rule.status);
                return ClassificationResult {
                    status: rule.status,
                    message: rule.status.message(),
                    safe: rule.status.is_safe(),
                    zone_kind: Some(zone.kind),
                    zone: Some(zone.name.clone()),
                };
            }
        }

        log::debug!("{} is outside every known zone", point);
        ClassificationResult::unknown()
    }
}
