//! Contact-sheet rendering from a slice manifest

use crate::document::manifest::{ManifestTile, SliceManifest};
use crate::io::error::{Result, TilesetError, config_error};
use crate::overview::labels;
use clap::ValueEnum;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Cell frame thickness in output pixels
const FRAME_THICKNESS: u32 = 2;

/// Label drawn under each overview cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LabelMode {
    /// No labels, cells only
    None,
    /// Tile index as three digits
    Index,
    /// Sheet (x, y) position
    Xy,
    /// Index and sheet position together
    IndexXy,
}

impl LabelMode {
    /// Label text for one manifest tile; `None` when labels are off
    pub fn text(self, tile: &ManifestTile) -> Option<String> {
        match self {
            Self::None => None,
            Self::Index => Some(format!("{:03}", tile.index)),
            Self::Xy => Some(format!("({},{})", tile.x, tile.y)),
            Self::IndexXy => Some(format!("{:03} ({},{})", tile.index, tile.x, tile.y)),
        }
    }
}

/// Options controlling overview rendering
#[derive(Debug, Clone, Copy)]
pub struct OverviewOptions {
    /// Nearest-neighbor scale applied to each tile
    pub scale: u32,
    /// Gutter between cells in output pixels
    pub pad: u32,
    /// Label drawn under each cell
    pub label: LabelMode,
    /// Pixel scale of label glyphs
    pub label_scale: u32,
}

impl Default for OverviewOptions {
    fn default() -> Self {
        Self {
            scale: 8,
            pad: 6,
            label: LabelMode::IndexXy,
            label_scale: 2,
        }
    }
}

impl OverviewOptions {
    /// Height of the label strip under each row of cells
    pub const fn label_height(&self) -> u32 {
        match self.label {
            LabelMode::None => 0,
            _ => labels::GLYPH_H * self.label_scale + 4,
        }
    }
}

/// Render the contact sheet for a manifest
///
/// Each manifest tile is scaled by nearest neighbor into its sheet cell
/// on a white canvas, framed in red, and labelled beneath. Cells with no
/// manifest entry stay blank. Tile alpha is dropped so stored colors
/// show as-is.
///
/// # Errors
///
/// Returns a configuration error for zero scales, or an image error if a
/// tile bitmap cannot be decoded
pub fn render_overview(
    manifest: &SliceManifest,
    sliced_dir: &Path,
    options: &OverviewOptions,
) -> Result<RgbaImage> {
    if options.scale == 0 {
        return Err(config_error(&"scale must be at least 1"));
    }
    if options.label != LabelMode::None && options.label_scale == 0 {
        return Err(config_error(&"label scale must be at least 1"));
    }

    let [tile_w, tile_h] = manifest.tile_size;
    let [cols, rows] = manifest.grid;
    let cell_w = tile_w * options.scale;
    let cell_h = tile_h * options.scale;
    let label_h = options.label_height();

    let out_w = cols * (cell_w + options.pad) + options.pad;
    let out_h = rows * (cell_h + label_h + options.pad) + options.pad;
    let mut canvas = RgbaImage::from_pixel(out_w, out_h, WHITE);

    let mut by_cell: BTreeMap<(u32, u32), &ManifestTile> = BTreeMap::new();
    let mut ordered: Vec<&ManifestTile> = manifest.tiles.iter().collect();
    ordered.sort_by_key(|tile| (tile.y, tile.x, tile.index));
    for tile in ordered {
        by_cell.insert((tile.x, tile.y), tile);
    }

    for row in 0..rows {
        for col in 0..cols {
            let Some(tile) = by_cell.get(&(col, row)) else {
                continue;
            };
            let path = sliced_dir.join(&tile.file);
            let bitmap = image::open(&path)
                .map_err(|e| TilesetError::ImageLoad {
                    path: path.clone(),
                    source: e,
                })?
                .to_rgba8();
            let scaled = imageops::resize(&opaque(&bitmap), cell_w, cell_h, FilterType::Nearest);

            let px = options.pad + col * (cell_w + options.pad);
            let py = options.pad + row * (cell_h + label_h + options.pad);
            imageops::replace(&mut canvas, &scaled, i64::from(px), i64::from(py));
            draw_frame(&mut canvas, px, py, cell_w, cell_h, FRAME_THICKNESS, RED);

            if let Some(text) = options.label.text(tile) {
                labels::draw_text(
                    &mut canvas,
                    &text,
                    px,
                    py + cell_h + 2,
                    options.label_scale,
                    BLACK,
                );
            }
        }
    }

    Ok(canvas)
}

/// Render and write the contact sheet for a manifest
///
/// # Errors
///
/// Returns an error if rendering fails or the output cannot be written
pub fn write_overview(
    manifest: &SliceManifest,
    sliced_dir: &Path,
    out_path: &Path,
    options: &OverviewOptions,
) -> Result<()> {
    let canvas = render_overview(manifest, sliced_dir, options)?;
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent).map_err(|e| TilesetError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    canvas.save(out_path).map_err(|e| TilesetError::ImageExport {
        path: out_path.to_path_buf(),
        source: e,
    })
}

/// Drop the alpha channel, keeping stored colors
fn opaque(bitmap: &RgbaImage) -> RgbaImage {
    let mut out = bitmap.clone();
    for pixel in out.pixels_mut() {
        let Rgba([r, g, b, _]) = *pixel;
        *pixel = Rgba([r, g, b, 255]);
    }
    out
}

/// Draw a frame of the given thickness just inside a rectangle
fn draw_frame(
    canvas: &mut RgbaImage,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    thickness: u32,
    color: Rgba<u8>,
) {
    let mut put = |px: u32, py: u32| {
        if let Some(pixel) = canvas.get_pixel_mut_checked(px, py) {
            *pixel = color;
        }
    };
    for t in 0..thickness.min(h) {
        for dx in 0..w {
            put(x + dx, y + t);
            put(x + dx, y + h - 1 - t);
        }
    }
    for t in 0..thickness.min(w) {
        for dy in 0..h {
            put(x + t, y + dy);
            put(x + w - 1 - t, y + dy);
        }
    }
}
