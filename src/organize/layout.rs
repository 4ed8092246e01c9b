//! Layout reassembly for positioned groups

use crate::document::index::{LayoutDoc, LayoutPlacement};
use crate::io::error::{Result, TilesetError, catalog_error};
use crate::organize::assigner::GroupPlan;
use image::{Rgba, RgbaImage, imageops};
use std::collections::BTreeMap;

/// Assemble a group's positioned members into one composite image
///
/// Positions are normalized to a zero-based bounding box and each bitmap
/// is composited with pixel replacement onto a transparent canvas, one
/// cell of `tile_size` per position. Members without an explicit
/// position take no part in the layout. Returns `None` when the group
/// has no positioned members.
///
/// # Errors
///
/// Returns a duplicate-position error when two members normalize to the
/// same cell, or a catalog error if a bitmap is missing from `bitmaps`
pub fn assemble_layout(
    plan: &GroupPlan,
    bitmaps: &BTreeMap<u32, RgbaImage>,
    tile_size: [u32; 2],
) -> Result<Option<(RgbaImage, LayoutDoc)>> {
    let positioned: Vec<_> = plan.tiles.iter().filter(|t| t.explicit_pos).collect();
    if positioned.is_empty() {
        return Ok(None);
    }

    let min_x = positioned.iter().map(|t| t.local[0]).min().unwrap_or(0);
    let min_y = positioned.iter().map(|t| t.local[1]).min().unwrap_or(0);
    let max_x = positioned.iter().map(|t| t.local[0]).max().unwrap_or(0);
    let max_y = positioned.iter().map(|t| t.local[1]).max().unwrap_or(0);
    let grid_w = (max_x - min_x + 1) as u32;
    let grid_h = (max_y - min_y + 1) as u32;

    let [tile_w, tile_h] = tile_size;
    let mut canvas = RgbaImage::from_pixel(
        grid_w * tile_w,
        grid_h * tile_h,
        Rgba([255, 255, 255, 0]),
    );

    let mut claimed: BTreeMap<[i32; 2], u32> = BTreeMap::new();
    let mut placed = Vec::with_capacity(positioned.len());

    for tile in positioned {
        let norm = [tile.local[0] - min_x, tile.local[1] - min_y];
        if let Some(&first) = claimed.get(&norm) {
            return Err(TilesetError::DuplicatePosition {
                group: plan.id.clone(),
                position: norm,
                first,
                second: tile.index,
            });
        }
        claimed.insert(norm, tile.index);

        let bitmap = bitmaps
            .get(&tile.index)
            .ok_or_else(|| catalog_error(&format!("no bitmap loaded for tile {}", tile.index)))?;
        imageops::replace(
            &mut canvas,
            bitmap,
            i64::from(norm[0] as u32 * tile_w),
            i64::from(norm[1] as u32 * tile_h),
        );

        placed.push(LayoutPlacement {
            index: tile.index,
            pos: norm,
            source_pos: tile.local,
            file: tile.filename.clone(),
        });
    }

    Ok(Some((
        canvas,
        LayoutDoc {
            grid: [grid_w, grid_h],
            placed,
        },
    )))
}
