mod common;

use std::fs;

use mukund_core::{Coordinate, ZoneKind, ZoneStatus};
use mukund_server::loader::load_evaluator;

fn c(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

#[test]
fn test_load_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let evaluator = load_evaluator(&common::write_dataset(dir.path())).unwrap();

    let zones = evaluator.index().zones();
    assert_eq!(zones.len(), 4);
    assert_eq!(zones[0].name, "eez");
    assert_eq!(zones[1].kind, ZoneKind::Eez);
    assert_eq!(zones[2].kind, ZoneKind::Danger);
    assert_eq!(zones[3].name, "high_seas");
    assert_eq!(evaluator.border_zone(), "eez");
    assert_eq!(evaluator.harbors().len(), 2);
    // Closing vertex dropped
    assert_eq!(evaluator.index().boundary_vertices("eez").unwrap().len(), 4);
}

#[test]
fn test_priority_across_files() {
    let dir = tempfile::tempdir().unwrap();
    let evaluator = load_evaluator(&common::write_dataset(dir.path())).unwrap();

    // Sri Lanka's box overlaps the EEZ between 7.0 and 7.5
    let overlap = evaluator.evaluate(c(7.2, 79.5)).unwrap();
    assert_eq!(overlap.classification.status, ZoneStatus::SafeEez);

    let danger = evaluator.evaluate(c(6.0, 80.0)).unwrap();
    assert_eq!(danger.classification.status, ZoneStatus::Danger);
    assert!(!danger.classification.safe);

    let exclave = evaluator.evaluate(c(11.0, 93.0)).unwrap();
    assert_eq!(exclave.classification.status, ZoneStatus::SafeEez);
    assert_eq!(exclave.classification.zone.as_deref(), Some("andaman"));

    let open_sea = evaluator.evaluate(c(0.0, 70.0)).unwrap();
    assert_eq!(open_sea.classification.status, ZoneStatus::SafeHighSeas);

    let nowhere = evaluator.evaluate(c(40.0, 10.0)).unwrap();
    assert_eq!(nowhere.classification.status, ZoneStatus::Unknown);
    assert!(!nowhere.classification.safe);
}

#[test]
fn test_bad_zone_file_reported() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = common::write_dataset(dir.path());
    fs::write(
        dir.path().join("sri_lanka.json"),
        r#"{"type": "Polygon", "coordinates": [[[79, 5], [80, 6], [79, 5]]]}"#,
    )
    .unwrap();

    let err = load_evaluator(&manifest).unwrap_err();
    assert!(format!("{:?}", err).contains("sri_lanka"));
}

#[test]
fn test_missing_harbor_file() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = common::write_dataset(dir.path());
    fs::remove_file(dir.path().join("harbour.csv")).unwrap();
    assert!(load_evaluator(&manifest).is_err());
}

#[test]
fn test_empty_harbor_table_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = common::write_dataset(dir.path());
    fs::write(dir.path().join("harbour.csv"), "name,latitude,longitude\n").unwrap();

    let err = load_evaluator(&manifest).unwrap_err();
    assert!(err.to_string().contains("harbour.csv"));
}

#[test]
fn test_quoted_harbor_names() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = common::write_dataset(dir.path());
    fs::write(
        dir.path().join("harbour.csv"),
        "name,latitude,longitude\n\"Kasimedu, Chennai\",13.12,80.29\n",
    )
    .unwrap();

    let evaluator = load_evaluator(&manifest).unwrap();
    assert_eq!(evaluator.harbors().harbors()[0].name, "Kasimedu, Chennai");
}

#[test]
fn test_unknown_border_zone() {
    let dir = tempfile::tempdir().unwrap();
    common::write_dataset(dir.path());
    let manifest = dir.path().join("other.json");
    fs::write(
        &manifest,
        r#"{"eez": ["eez.json"], "border_zone": "nope", "harbors": "harbour.csv"}"#,
    )
    .unwrap();
    assert!(load_evaluator(&manifest).is_err());
}
