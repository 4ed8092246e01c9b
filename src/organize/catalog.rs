//! Tile catalog built from a slice manifest

use crate::document::manifest::SliceManifest;
use crate::io::error::{Result, TilesetError, catalog_error};
use image::RgbaImage;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One tile's catalog record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRecord {
    /// Tileset-wide index
    pub index: u32,
    /// Sheet (column, row)
    pub sheet_position: (u32, u32),
    /// Pixel rectangle in the source image as [x, y, width, height]
    pub source_rect: [u32; 4],
    /// Bitmap path relative to the catalog root
    pub source_file: PathBuf,
}

/// Index from tile identifier to bitmap location and sheet coordinates
///
/// Read-only once built. Downstream components resolve tiles through it
/// and never touch the manifest again.
#[derive(Debug)]
pub struct TileCatalog {
    root: PathBuf,
    tile_size: [u32; 2],
    grid: [u32; 2],
    records: BTreeMap<u32, TileRecord>,
}

impl TileCatalog {
    /// Load a catalog from a slice manifest on disk
    ///
    /// The manifest's directory becomes the root that tile files resolve
    /// against.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest is unreadable, repeats a tile
    /// index, or references a bitmap file that does not exist
    pub fn load(manifest_path: &Path) -> Result<Self> {
        let manifest = SliceManifest::load(manifest_path)?;
        let root = manifest_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        Self::from_manifest(&manifest, root)
    }

    /// Build a catalog from an already-parsed manifest
    ///
    /// # Errors
    ///
    /// Returns a catalog error if the manifest repeats a tile index or
    /// references a bitmap file absent from `root`
    pub fn from_manifest(manifest: &SliceManifest, root: PathBuf) -> Result<Self> {
        let mut records = BTreeMap::new();
        for tile in &manifest.tiles {
            let record = TileRecord {
                index: tile.index,
                sheet_position: (tile.x, tile.y),
                source_rect: tile.rect,
                source_file: PathBuf::from(&tile.file),
            };
            if records.insert(tile.index, record).is_some() {
                return Err(catalog_error(&format!(
                    "duplicate tile index {}",
                    tile.index
                )));
            }
            let bitmap = root.join(&tile.file);
            if !bitmap.is_file() {
                return Err(catalog_error(&format!(
                    "tile {} bitmap missing: '{}'",
                    tile.index,
                    bitmap.display()
                )));
            }
        }
        Ok(Self {
            root,
            tile_size: manifest.tile_size,
            grid: manifest.grid,
            records,
        })
    }

    /// Root directory tile files resolve against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Tile dimensions in pixels, as declared by the manifest
    pub const fn tile_size(&self) -> [u32; 2] {
        self.tile_size
    }

    /// Slice grid dimensions as [columns, rows]
    pub const fn grid(&self) -> [u32; 2] {
        self.grid
    }

    /// Number of tiles in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no tiles
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up one tile's record
    pub fn get(&self, index: u32) -> Option<&TileRecord> {
        self.records.get(&index)
    }

    /// Whether the catalog holds the given index
    pub fn contains(&self, index: u32) -> bool {
        self.records.contains_key(&index)
    }

    /// All catalog indices, ascending
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.records.keys().copied()
    }

    /// Absolute path of a record's bitmap
    pub fn bitmap_path(&self, record: &TileRecord) -> PathBuf {
        self.root.join(&record.source_file)
    }

    /// Decode a tile's bitmap as RGBA
    ///
    /// # Errors
    ///
    /// Returns a catalog error for an unknown index, or an image error
    /// if the bitmap cannot be decoded
    pub fn open_bitmap(&self, index: u32) -> Result<RgbaImage> {
        let record = self
            .records
            .get(&index)
            .ok_or_else(|| catalog_error(&format!("tile {index} is not in the catalog")))?;
        let path = self.bitmap_path(record);
        let bitmap = image::open(&path).map_err(|e| TilesetError::ImageLoad {
            path: path.clone(),
            source: e,
        })?;
        Ok(bitmap.to_rgba8())
    }
}
