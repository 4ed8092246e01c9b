//! Contact-sheet rendering for sliced tilesets

/// Built-in glyph strip for labels
pub mod labels;
/// Contact-sheet layout and rendering
pub mod sheet;
