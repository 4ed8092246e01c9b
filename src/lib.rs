//! Tileset slicing, organization, and edge-match connection inference
//!
//! The pipeline turns a grid-based tileset image into an organized asset
//! bundle: sliced tile bitmaps, named groups with deterministic filenames,
//! reassembled layout composites, and ranked edge-match metadata, all tied
//! together by a single JSON index document.

#![forbid(unsafe_code)]

/// JSON documents crossing the crate boundary: manifest, config, index
pub mod document;
/// Input/output operations, CLI surface, and error handling
pub mod io;
/// Tile organization: catalog, groups, layouts, edge inference, bundling
pub mod organize;
/// Overview contact-sheet rendering
pub mod overview;
/// Tileset sheet slicing
pub mod sheet;

pub use io::error::{Result, TilesetError};
