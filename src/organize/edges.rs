//! Edge-match inference over binarized tile borders

use crate::document::index::{EdgeCandidate, EdgeMatchDoc, EdgeNeighbors};
use crate::io::error::{Result, TilesetError, config_error};
use crate::sheet::pixels;
use bitvec::prelude::*;
use image::RgbaImage;
use ndarray::Array2;
use std::collections::BTreeMap;

/// Cardinal direction of a tile border
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Top row
    North,
    /// Right column
    East,
    /// Bottom row
    South,
    /// Left column
    West,
}

impl Direction {
    /// All directions in document order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The direction whose border faces this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

/// The four border bit-vectors of one binarized tile
struct Borders {
    north: BitVec,
    east: BitVec,
    south: BitVec,
    west: BitVec,
}

impl Borders {
    fn get(&self, direction: Direction) -> &BitVec {
        match direction {
            Direction::North => &self.north,
            Direction::East => &self.east,
            Direction::South => &self.south,
            Direction::West => &self.west,
        }
    }
}

/// Foreground mask of a bitmap, row-major
fn binarize(bitmap: &RgbaImage) -> Array2<u8> {
    let (w, h) = bitmap.dimensions();
    Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
        u8::from(pixels::is_foreground(
            *bitmap.get_pixel(col as u32, row as u32),
        ))
    })
}

/// Extract the border bit-vectors of a mask, in original pixel order
fn borders(mask: &Array2<u8>) -> Borders {
    let (rows, cols) = mask.dim();
    let row_bits = |r: usize| mask.row(r).iter().map(|&v| v != 0).collect::<BitVec>();
    let col_bits = |c: usize| mask.column(c).iter().map(|&v| v != 0).collect::<BitVec>();
    Borders {
        north: row_bits(0),
        south: row_bits(rows.saturating_sub(1)),
        west: col_bits(0),
        east: col_bits(cols.saturating_sub(1)),
    }
}

/// Bits differing between two equal-length borders
fn hamming(a: &BitVec, b: &BitVec) -> u32 {
    let mut diff = a.clone();
    diff ^= b;
    diff.count_ones() as u32
}

/// Rank, per tile and direction, the other tiles whose opposite border
/// best matches
///
/// Candidates are ordered by (distance, index) ascending and truncated
/// to `top_k`, so output is deterministic for identical inputs and ties
/// go to the smaller index. A tile never matches itself; a group with a
/// single tile gets empty candidate lists.
///
/// # Errors
///
/// Returns a configuration error when `top_k` is zero, or a
/// dimension-mismatch error naming the first tile whose bitmap does not
/// match `tile_size`
pub fn infer_edge_matches(
    group: &str,
    bitmaps: &BTreeMap<u32, RgbaImage>,
    tile_size: [u32; 2],
    top_k: usize,
) -> Result<EdgeMatchDoc> {
    if top_k == 0 {
        return Err(config_error(&format!(
            "group '{group}': top_k must be at least 1"
        )));
    }

    let expected = (tile_size[0], tile_size[1]);
    for (&index, bitmap) in bitmaps {
        let found = bitmap.dimensions();
        if found != expected {
            return Err(TilesetError::DimensionMismatch {
                group: group.to_string(),
                expected,
                index,
                found,
            });
        }
    }

    let borders_by_index: BTreeMap<u32, Borders> = bitmaps
        .iter()
        .map(|(&index, bitmap)| (index, borders(&binarize(bitmap))))
        .collect();

    let mut tiles = BTreeMap::new();
    for (&index, own) in &borders_by_index {
        let mut neighbors = EdgeNeighbors::default();
        for direction in Direction::ALL {
            let mut candidates: Vec<EdgeCandidate> = borders_by_index
                .iter()
                .filter(|&(&other, _)| other != index)
                .map(|(&other, theirs)| EdgeCandidate {
                    index: other,
                    distance: hamming(own.get(direction), theirs.get(direction.opposite())),
                })
                .collect();
            candidates.sort_by_key(|c| (c.distance, c.index));
            candidates.truncate(top_k);
            match direction {
                Direction::North => neighbors.north = candidates,
                Direction::East => neighbors.east = candidates,
                Direction::South => neighbors.south = candidates,
                Direction::West => neighbors.west = candidates,
            }
        }
        tiles.insert(index, neighbors);
    }

    Ok(EdgeMatchDoc { top_k, tiles })
}
