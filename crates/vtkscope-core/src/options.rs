//! Configuration options for loading VTK files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// VTK cell type code for a linear hexahedron.
pub const VTK_HEXAHEDRON: u32 = 12;

/// Options controlling how strictly a VTK file is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Whether section keywords (`DATASET`, `POINTS`, `CELLS`, ...) and the
    /// `ASCII` encoding line are checked against their expected literals.
    ///
    /// When disabled, keywords are consumed by position only.
    pub strict_keywords: bool,

    /// What to do with the codes in the `CELL_TYPES` section.
    pub cell_type_policy: CellTypePolicy,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            strict_keywords: true,
            cell_type_policy: CellTypePolicy::RequireHexahedron,
        }
    }
}

impl LoadOptions {
    /// Options that reproduce the legacy positional reader: no keyword checks
    /// and cell type codes discarded unread.
    pub fn lenient() -> Self {
        Self {
            strict_keywords: false,
            cell_type_policy: CellTypePolicy::Ignore,
        }
    }

    /// Parses options from a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Handling of the `CELL_TYPES` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CellTypePolicy {
    /// Every cell must carry the hexahedron code; anything else is an error.
    #[default]
    RequireHexahedron,
    /// Cell type codes are skipped and every cell is triangulated as a hexahedron.
    Ignore,
}
