//! Tileset sheet slicing
//!
//! This module contains the slicing stage of the pipeline:
//! - slice grid geometry over margins and spacing
//! - pixel predicates shared with edge inference
//! - the slicing driver that cuts tiles and writes the manifest

/// Slice grid geometry
pub mod grid;
/// Pixel-level predicates and rewrites
pub mod pixels;
/// Tile cutting and manifest emission
pub mod slicer;

pub use grid::{SliceGrid, SliceSpec};
