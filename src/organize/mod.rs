//! Tile organization and connection inference
//!
//! The engine's components in pipeline order: catalog, group assigner,
//! layout assembler, edge-match inference, bundle writer. Data flows
//! strictly forward; no component re-enters an earlier one.

/// Group assignment planning and tile copying
pub mod assigner;
/// Bundle sequencing and index emission
pub mod bundle;
/// Tile catalog built from a slice manifest
pub mod catalog;
/// Edge-match inference for autotile groups
pub mod edges;
/// Layout reassembly for positioned groups
pub mod layout;
/// Output naming for groups and tiles
pub mod naming;

pub use catalog::TileCatalog;
