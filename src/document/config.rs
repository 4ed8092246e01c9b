//! Organize configuration: groups, member positions, and connection requests

use crate::document::json;
use crate::io::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Connection metadata requested for a group
///
/// Tagged by a `"type"` field so configurations read as
/// `{"type": "layout"}` or `{"type": "edge_match", "top_k": 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConnectSpec {
    /// Members form a spatial layout to be recomposited into one image
    Layout,
    /// Members form an autotile set; infer per-edge compatibility
    EdgeMatch {
        /// Candidates to keep per tile edge, best first
        #[serde(default = "default_top_k")]
        top_k: usize,
    },
}

const fn default_top_k() -> usize {
    5
}

/// One member tile of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSpec {
    /// Catalog index of the tile
    pub index: u32,
    /// Group-local position; may be negative, normalized later
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<[i32; 2]>,
    /// Explicit output filename stem, sanitized before use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One named group of tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Group identifier; doubles as the output subdirectory, so it must be
    /// a relative path without parent components
    pub id: String,
    /// Base name for coordinate filenames; defaults to the sanitized last
    /// `/`-segment of the id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_name: Option<String>,
    /// Connection metadata to compute for this group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect: Option<ConnectSpec>,
    /// Member tiles
    pub tiles: Vec<TileSpec>,
}

/// Root organize configuration document
///
/// Top-level fields are optional at parse time; the bundle writer
/// validates the ones it requires and reports which is missing, which a
/// hard serde error could not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OrganizeConfig {
    /// Stable identifier for the bundle, also the default output root name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tileset_id: Option<String>,
    /// Reference back to the source tileset image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_image: Option<String>,
    /// Tile dimensions in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_size: Option<[u32; 2]>,
    /// Directory containing the sliced tiles and their manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sliced_dir: Option<PathBuf>,
    /// Group definitions, processed in order (`directories` is accepted as
    /// a legacy spelling)
    #[serde(default, alias = "directories")]
    pub groups: Vec<GroupSpec>,
}

impl OrganizeConfig {
    /// Read a configuration document from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or not valid JSON for
    /// this schema
    pub fn load(path: &Path) -> Result<Self> {
        json::read_document(path)
    }
}
