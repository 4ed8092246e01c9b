//! Cut a tileset sheet into per-tile bitmaps plus a manifest

use crate::document::manifest::{MANIFEST_FILENAME, ManifestTile, SliceManifest};
use crate::io::error::{Result, TilesetError, config_error};
use crate::io::progress::ProgressReporter;
use crate::sheet::grid::{SliceGrid, SliceSpec};
use crate::sheet::pixels;
use std::fs;
use std::path::{Path, PathBuf};

/// Slicing options beyond the grid geometry
#[derive(Debug, Clone, Copy, Default)]
pub struct SliceOptions {
    /// Skip tiles with no content
    pub trim_empty: bool,
    /// Rewrite opaque pure white to transparent before testing and saving
    pub transparent_white: bool,
}

/// Outcome of a slicing run
#[derive(Debug)]
pub struct SliceSummary {
    /// Directory the tiles and manifest were written to
    pub out_dir: PathBuf,
    /// Number of tiles written
    pub kept: usize,
    /// Number of grid cells skipped as empty
    pub skipped: usize,
    /// The manifest, as written
    pub manifest: SliceManifest,
}

/// Deterministic bitmap filename for the tile at (column, row)
pub fn tile_filename(index: u32, col: u32, row: u32) -> String {
    format!("tile_{index:03}_x{col:02}_y{row:02}.png")
}

/// Slice a tileset image into per-tile PNGs and write the manifest
///
/// Cells are visited in row-major order; each kept tile gets a manifest
/// entry, so trimmed cells leave gaps in the index sequence rather than
/// renumbering later tiles.
///
/// # Errors
///
/// Returns an error if the tile dimensions are zero, the sheet cannot be
/// decoded, or any tile or the manifest cannot be written
pub fn slice_sheet(
    image_path: &Path,
    out_dir: &Path,
    spec: SliceSpec,
    options: SliceOptions,
    progress: &mut ProgressReporter,
) -> Result<SliceSummary> {
    if spec.tile_w == 0 || spec.tile_h == 0 {
        return Err(config_error(&"tile dimensions must be at least 1x1"));
    }

    let sheet = image::open(image_path)
        .map_err(|e| TilesetError::ImageLoad {
            path: image_path.to_path_buf(),
            source: e,
        })?
        .to_rgba8();
    let (sheet_w, sheet_h) = sheet.dimensions();
    let grid = SliceGrid::new(spec, sheet_w, sheet_h);

    fs::create_dir_all(out_dir).map_err(|e| TilesetError::FileSystem {
        path: out_dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let mut manifest = SliceManifest {
        source: image_path.display().to_string(),
        tileset_size: [sheet_w, sheet_h],
        tile_size: [spec.tile_w, spec.tile_h],
        margin: [spec.margin_x, spec.margin_y],
        spacing: [spec.spacing_x, spec.spacing_y],
        grid: [grid.cols(), grid.rows()],
        tiles: Vec::new(),
    };

    progress.begin(grid.cell_count(), "Slicing");
    let mut skipped = 0;

    for (col, row) in grid.cells() {
        let (x0, y0) = grid.origin(col, row);
        let mut tile =
            image::imageops::crop_imm(&sheet, x0, y0, spec.tile_w, spec.tile_h).to_image();
        if options.transparent_white {
            pixels::white_to_transparent(&mut tile);
        }
        if options.trim_empty && pixels::is_empty(&tile, options.transparent_white) {
            skipped += 1;
            progress.step();
            continue;
        }

        let index = grid.index(col, row);
        let filename = tile_filename(index, col, row);
        let tile_path = out_dir.join(&filename);
        tile.save(&tile_path).map_err(|e| TilesetError::ImageExport {
            path: tile_path.clone(),
            source: e,
        })?;

        manifest.tiles.push(ManifestTile {
            index,
            x: col,
            y: row,
            rect: [x0, y0, spec.tile_w, spec.tile_h],
            file: filename,
        });
        progress.step();
    }
    progress.finish();

    manifest.save(&out_dir.join(MANIFEST_FILENAME))?;

    let kept = manifest.tiles.len();
    Ok(SliceSummary {
        out_dir: out_dir.to_path_buf(),
        kept,
        skipped,
        manifest,
    })
}
