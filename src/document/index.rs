//! Bundle index: the root document tying groups, tiles, and metadata together

use crate::document::config::ConnectSpec;
use crate::document::json;
use crate::io::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Filename of the bundle index within the output root
pub const INDEX_FILENAME: &str = "tileset.json";

/// Where one consumed tile ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileAssignment {
    /// Id of the group that consumed the tile
    pub group: String,
    /// Copied bitmap path relative to the output root
    pub file: String,
    /// Sheet column in the source tileset
    pub sheet_x: u32,
    /// Sheet row in the source tileset
    pub sheet_y: u32,
    /// Resolved group-local x
    pub x: i32,
    /// Resolved group-local y
    pub y: i32,
}

/// A tile's entry within its group result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTile {
    /// Catalog index
    pub index: u32,
    /// Sheet column in the source tileset
    pub sheet_x: u32,
    /// Sheet row in the source tileset
    pub sheet_y: u32,
    /// Resolved group-local x
    pub x: i32,
    /// Resolved group-local y
    pub y: i32,
    /// Copied bitmap path relative to the output root
    pub file: String,
}

/// One placed tile in an assembled layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutPlacement {
    /// Catalog index
    pub index: u32,
    /// Normalized (zero-based) cell within the assembled grid
    pub pos: [i32; 2],
    /// Position as written in the configuration
    pub source_pos: [i32; 2],
    /// The member's bitmap filename within the group directory
    pub file: String,
}

/// Reassembled layout summary for one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDoc {
    /// Assembled grid dimensions as [columns, rows]
    pub grid: [u32; 2],
    /// Every placed tile, in configuration order
    pub placed: Vec<LayoutPlacement>,
}

/// One ranked neighbor candidate for a tile edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCandidate {
    /// Candidate tile's catalog index
    pub index: u32,
    /// Hamming distance between the facing borders
    pub distance: u32,
}

/// Ranked candidates for each cardinal direction of one tile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeNeighbors {
    /// Candidates whose south border faces this tile's north border
    #[serde(rename = "N")]
    pub north: Vec<EdgeCandidate>,
    /// Candidates whose west border faces this tile's east border
    #[serde(rename = "E")]
    pub east: Vec<EdgeCandidate>,
    /// Candidates whose north border faces this tile's south border
    #[serde(rename = "S")]
    pub south: Vec<EdgeCandidate>,
    /// Candidates whose east border faces this tile's west border
    #[serde(rename = "W")]
    pub west: Vec<EdgeCandidate>,
}

/// Edge-match inference output for one group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeMatchDoc {
    /// Candidate list length requested for each edge
    pub top_k: usize,
    /// Per-tile ranked candidates, keyed by catalog index
    pub tiles: BTreeMap<u32, EdgeNeighbors>,
}

/// One group's complete result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupResult {
    /// Group identifier
    pub id: String,
    /// Resolved base name used for coordinate filenames
    pub base_name: String,
    /// Connection metadata the group was configured with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect: Option<ConnectSpec>,
    /// Member tiles, sorted by (y, x, index)
    pub tiles: Vec<GroupTile>,
    /// Layout summary, present for layout groups with positioned members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutDoc>,
    /// Assembled composite path relative to the output root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembled: Option<String>,
    /// Edge-match inference results, present for edge-match groups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_matches: Option<EdgeMatchDoc>,
}

/// Root bundle index document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleIndex {
    /// Stable identifier for the bundle
    pub tileset_id: String,
    /// Reference back to the source tileset image
    pub source: String,
    /// Tile dimensions in pixels
    pub tile_size: [u32; 2],
    /// Every consumed tile, keyed by catalog index
    pub tiles: BTreeMap<u32, TileAssignment>,
    /// Group results in configuration order
    pub groups: Vec<GroupResult>,
    /// Catalog indices never assigned to any group, ascending
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unassigned: Vec<u32>,
}

impl BundleIndex {
    /// Read a bundle index document from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or not a valid index
    pub fn load(path: &Path) -> Result<Self> {
        json::read_document(path)
    }

    /// Write the bundle index document to disk
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized or written
    pub fn save(&self, path: &Path) -> Result<()> {
        json::write_document(path, self)
    }
}
