//! GeoJSON zone parsing
//!
//! Accepts a `FeatureCollection`, a single `Feature`, a
//! `GeometryCollection`, or a bare geometry. Only `Polygon` and
//! `MultiPolygon` contribute parts; other geometry types are skipped.
//! Positions are `[longitude, latitude]`.

use serde_json::Value;

use super::Polygon;
use crate::error::{GeoError, Result};
use crate::geo::Coordinate;

/// Parse every polygon part found in a GeoJSON document
pub fn parse_polygons(text: &str) -> Result<Vec<Polygon>> {
    let root: Value =
        serde_json::from_str(text).map_err(|e| GeoError::Parse(format!("invalid JSON: {}", e)))?;

    let mut parts = Vec::new();
    collect(&root, &mut parts)?;
    Ok(parts)
}

fn collect(node: &Value, parts: &mut Vec<Polygon>) -> Result<()> {
    let kind = node
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| GeoError::Parse("object without \"type\"".into()))?;

    match kind {
        "FeatureCollection" => {
            for feature in array_field(node, "features")? {
                collect(feature, parts)?;
            }
        }
        "Feature" => match node.get("geometry") {
            Some(Value::Null) | None => log::trace!("Skipping feature without geometry"),
            Some(geometry) => collect(geometry, parts)?,
        },
        "GeometryCollection" => {
            for geometry in array_field(node, "geometries")? {
                collect(geometry, parts)?;
            }
        }
        "Polygon" => {
            parts.push(parse_polygon(array_field(node, "coordinates")?)?);
        }
        "MultiPolygon" => {
            for polygon in array_field(node, "coordinates")? {
                parts.push(parse_polygon(as_array(polygon, "polygon")?)?);
            }
        }
        other => log::debug!("Ignoring {} geometry", other),
    }
    Ok(())
}

fn parse_polygon(rings: &[Value]) -> Result<Polygon> {
    let mut rings = rings.iter().map(parse_ring);
    let exterior = rings
        .next()
        .ok_or_else(|| GeoError::Parse("polygon without rings".into()))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::with_holes(exterior, interiors))
}

fn parse_ring(ring: &Value) -> Result<Vec<Coordinate>> {
    as_array(ring, "ring")?.iter().map(parse_position).collect()
}

fn parse_position(position: &Value) -> Result<Coordinate> {
    let pair = as_array(position, "position")?;
    match (
        pair.first().and_then(Value::as_f64),
        pair.get(1).and_then(Value::as_f64),
    ) {
        (Some(lon), Some(lat)) => Coordinate::from_lon_lat(lon, lat),
        _ => Err(GeoError::Parse(format!("bad position {}", position))),
    }
}

fn array_field<'a>(node: &'a Value, field: &str) -> Result<&'a [Value]> {
    let value = node
        .get(field)
        .ok_or_else(|| GeoError::Parse(format!("missing \"{}\"", field)))?;
    as_array(value, field)
}

fn as_array<'a>(value: &'a Value, what: &str) -> Result<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| GeoError::Parse(format!("{} is not an array", what)))
}
