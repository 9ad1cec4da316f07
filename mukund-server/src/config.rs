//! Dataset manifest
//!
//! A small JSON file listing which GeoJSON files make up each zone and
//! where the harbor table lives. Relative paths are resolved against the
//! directory holding the manifest.
//!
//! ```json
//! {
//!   "eez": ["eez.json"],
//!   "safe_exclaves": [{ "name": "andaman", "files": ["andaman.json"] }],
//!   "danger": [
//!     { "name": "sri_lanka", "files": ["sri_lanka.json"] },
//!     { "name": "indonesia", "files": ["indonesia_a.json", "indonesia_b.json"] }
//!   ],
//!   "high_seas": ["high_sea.json"],
//!   "harbors": "harbour.csv"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};

/// Zone name given to the home EEZ
pub const EEZ_ZONE: &str = "eez";

/// Zone name given to the high seas
pub const HIGH_SEAS_ZONE: &str = "high_seas";

/// A named zone assembled from one or more files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSource {
    pub name: String,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataManifest {
    /// Files making up the home EEZ
    pub eez: Vec<PathBuf>,

    /// Island groups and other detached safe areas
    #[serde(default)]
    pub safe_exclaves: Vec<ZoneSource>,

    /// Bordering countries
    #[serde(default)]
    pub danger: Vec<ZoneSource>,

    #[serde(default)]
    pub high_seas: Vec<PathBuf>,

    /// Zone whose outer rings are treated as the border
    #[serde(default = "default_border_zone")]
    pub border_zone: String,

    /// CSV table of harbors
    pub harbors: PathBuf,
}

fn default_border_zone() -> String {
    EEZ_ZONE.to_string()
}

impl DataManifest {
    /// Read a manifest and make every path in it absolute
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Cannot read manifest {}", path.display()))?;
        let manifest: DataManifest = serde_json::from_str(&text)
            .into_diagnostic()
            .wrap_err_with(|| format!("Invalid manifest {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(manifest.resolve(base))
    }

    fn resolve(mut self, base: &Path) -> Self {
        let join = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        self.eez.iter_mut().for_each(join);
        self.high_seas.iter_mut().for_each(join);
        self.safe_exclaves
            .iter_mut()
            .chain(self.danger.iter_mut())
            .flat_map(|s| s.files.iter_mut())
            .for_each(join);
        join(&mut self.harbors);
        self
    }
}
