//! Reference data loading
//!
//! Reads the files named by a [`DataManifest`] and builds a
//! [`FixEvaluator`]. All file access lives here; parsing and validation
//! are delegated to mukund-core.

use std::fs;
use std::path::{Path, PathBuf};

use miette::{bail, IntoDiagnostic, Result, WrapErr};
use mukund_core::zones::geojson;
use mukund_core::{FixEvaluator, HarborCatalog, PolygonIndex, Zone, ZoneKind};

use crate::config::{DataManifest, EEZ_ZONE, HIGH_SEAS_ZONE};

/// Load the manifest at `path` and everything it references
pub fn load_evaluator(path: &Path) -> Result<FixEvaluator> {
    let manifest = DataManifest::load(path)?;
    build_evaluator(&manifest)
}

pub fn build_evaluator(manifest: &DataManifest) -> Result<FixEvaluator> {
    let mut zones = Vec::new();

    if !manifest.eez.is_empty() {
        zones.push(load_zone(EEZ_ZONE, ZoneKind::Eez, &manifest.eez)?);
    }
    for exclave in &manifest.safe_exclaves {
        zones.push(load_zone(&exclave.name, ZoneKind::Eez, &exclave.files)?);
    }
    for country in &manifest.danger {
        zones.push(load_zone(&country.name, ZoneKind::Danger, &country.files)?);
    }
    if !manifest.high_seas.is_empty() {
        zones.push(load_zone(HIGH_SEAS_ZONE, ZoneKind::HighSeas, &manifest.high_seas)?);
    }

    let index = PolygonIndex::load(zones).into_diagnostic()?;

    let text = read(&manifest.harbors)?;
    let harbors = HarborCatalog::from_csv(&text)
        .into_diagnostic()
        .wrap_err_with(|| format!("Invalid harbor table {}", manifest.harbors.display()))?;
    if harbors.is_empty() {
        bail!("Harbor table {} has no harbors", manifest.harbors.display());
    }

    log::info!(
        "Loaded {} zones and {} harbors, border zone '{}'",
        index.zones().len(),
        harbors.len(),
        manifest.border_zone
    );

    FixEvaluator::new(index, harbors, manifest.border_zone.clone()).into_diagnostic()
}

fn load_zone(name: &str, kind: ZoneKind, files: &[PathBuf]) -> Result<Zone> {
    let mut parts = Vec::new();
    for file in files {
        let text = read(file)?;
        let polygons = geojson::parse_polygons(&text)
            .into_diagnostic()
            .wrap_err_with(|| format!("Invalid zone file {}", file.display()))?;
        log::debug!("{}: {} polygons from {}", name, polygons.len(), file.display());
        parts.extend(polygons);
    }
    Ok(Zone::new(name, kind, parts))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Cannot read {}", path.display()))
}
