use std::fs;
use std::path::{Path, PathBuf};

/// GeoJSON FeatureCollection with one rectangular MultiPolygon, `[lon, lat]` order
pub fn rectangle(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> String {
    format!(
        r#"{{"type": "FeatureCollection", "features": [{{
            "type": "Feature",
            "properties": {{}},
            "geometry": {{"type": "MultiPolygon", "coordinates": [[[
                [{min_lon}, {min_lat}], [{max_lon}, {min_lat}], [{max_lon}, {max_lat}],
                [{min_lon}, {max_lat}], [{min_lon}, {min_lat}]
            ]]]}}
        }}]}}"#
    )
}

pub const HARBORS: &str = "\
name,latitude,longitude
A,8.1,79.2
B,8.5,79.9
";

/// Writes a small dataset and returns the manifest path
pub fn write_dataset(dir: &Path) -> PathBuf {
    fs::write(dir.join("eez.json"), rectangle(7.0, 9.0, 78.0, 80.0)).unwrap();
    fs::write(dir.join("andaman.json"), rectangle(10.0, 12.0, 92.0, 94.0)).unwrap();
    fs::write(dir.join("sri_lanka.json"), rectangle(5.0, 7.5, 79.0, 82.0)).unwrap();
    fs::write(dir.join("high_sea.json"), rectangle(-10.0, 20.0, 60.0, 100.0)).unwrap();
    fs::write(dir.join("harbour.csv"), HARBORS).unwrap();

    let manifest = dir.join("manifest.json");
    fs::write(
        &manifest,
        r#"{
            "eez": ["eez.json"],
            "safe_exclaves": [{"name": "andaman", "files": ["andaman.json"]}],
            "danger": [{"name": "sri_lanka", "files": ["sri_lanka.json"]}],
            "high_seas": ["high_sea.json"],
            "harbors": "harbour.csv"
        }"#,
    )
    .unwrap();
    manifest
}
