//! Slice manifest produced by the slicer and consumed downstream

use crate::document::json;
use crate::io::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Filename of the slice manifest within a sliced tile directory
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// One sliced tile's entry in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestTile {
    /// Tileset-wide index, row-major over the slice grid
    pub index: u32,
    /// Sheet column
    pub x: u32,
    /// Sheet row
    pub y: u32,
    /// Source-image pixel rectangle as [x, y, width, height]
    pub rect: [u32; 4],
    /// Bitmap filename relative to the sliced directory
    pub file: String,
}

/// Manifest describing every tile cut from one tileset image
///
/// Blank tiles skipped during slicing have no entry, so indices may be
/// sparse while remaining stable for a given grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceManifest {
    /// Path of the source tileset image as given to the slicer
    pub source: String,
    /// Source image dimensions in pixels
    pub tileset_size: [u32; 2],
    /// Tile dimensions in pixels
    pub tile_size: [u32; 2],
    /// Pixels before the first tile on each axis
    pub margin: [u32; 2],
    /// Pixels between adjacent tiles on each axis
    pub spacing: [u32; 2],
    /// Slice grid dimensions as [columns, rows]
    pub grid: [u32; 2],
    /// Entries for every tile that was kept
    pub tiles: Vec<ManifestTile>,
}

impl SliceManifest {
    /// Read a manifest document from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or not a valid manifest
    pub fn load(path: &Path) -> Result<Self> {
        json::read_document(path)
    }

    /// Write the manifest document to disk
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized or written
    pub fn save(&self, path: &Path) -> Result<()> {
        json::write_document(path, self)
    }
}
