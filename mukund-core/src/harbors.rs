//! Harbor Catalog
//!
//! Read-only list of named harbors, loaded once and searched for the
//! harbor nearest to a fix.
//!
//! The text format is a comma-separated table with a header row. Columns are
//! found by header name (`name`, `latitude`/`lat`, `longitude`/`lon`, case
//! insensitive); any other columns are ignored. Fields may be quoted, so
//! harbor names can carry commas.

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, Result};
use crate::geo::{distance_km, Coordinate};
use crate::nearest::{nearest, Nearest};

/// A harbor that a vessel can return to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Harbor {
    pub name: String,
    #[serde(flatten)]
    pub position: Coordinate,
}

impl Harbor {
    pub fn new(name: impl Into<String>, position: Coordinate) -> Self {
        Harbor {
            name: name.into(),
            position,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HarborCatalog {
    harbors: Vec<Harbor>,
}

impl HarborCatalog {
    pub fn new(harbors: Vec<Harbor>) -> Self {
        HarborCatalog { harbors }
    }

    /// Parse a CSV table of harbors
    pub fn from_csv(text: &str) -> Result<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader.headers().map_err(parse_error)?;
        let name_col = column(headers, &["name"])?;
        let lat_col = column(headers, &["latitude", "lat"])?;
        let lon_col = column(headers, &["longitude", "lon", "lng"])?;

        let mut harbors = Vec::new();
        for record in reader.records() {
            let record = record.map_err(parse_error)?;
            let line = record.position().map_or(0, |p| p.line());
            let field = |col: usize| {
                record.get(col).ok_or_else(|| {
                    GeoError::Parse(format!("line {}: expected {} fields", line, record.len().max(col + 1)))
                })
            };
            let number = |col: usize| -> Result<f64> {
                let raw = field(col)?;
                raw.parse()
                    .map_err(|_| GeoError::Parse(format!("line {}: '{}' is not a number", line, raw)))
            };

            let position = Coordinate::new(number(lat_col)?, number(lon_col)?)?;
            harbors.push(Harbor::new(field(name_col)?, position));
        }

        log::debug!("Parsed {} harbors", harbors.len());
        Ok(HarborCatalog { harbors })
    }

    pub fn harbors(&self) -> &[Harbor] {
        &self.harbors
    }

    pub fn len(&self) -> usize {
        self.harbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.harbors.is_empty()
    }

    /// Closest harbor to `origin` by great-circle distance
    pub fn nearest(&self, origin: Coordinate) -> Result<Nearest<&Harbor>> {
        nearest(origin, self.harbors.iter().map(|h| (h, h.position)), distance_km)
            .map_err(|_| GeoError::EmptyCandidateSet("harbor catalog"))
    }
}

fn column(headers: &csv::StringRecord, names: &[&str]) -> Result<usize> {
    headers
        .iter()
        .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
        .ok_or_else(|| GeoError::Parse(format!("harbor table lacks a '{}' column", names[0])))
}

fn parse_error(err: csv::Error) -> GeoError {
    GeoError::Parse(err.to_string())
}
