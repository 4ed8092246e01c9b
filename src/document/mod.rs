//! JSON documents crossing the crate boundary
//!
//! Three documents tie the pipeline stages together:
//! - the slice manifest (slicer output, catalog and overview input)
//! - the organize configuration (user input)
//! - the bundle index (organize output)

/// Organize configuration schema
pub mod config;
/// Bundle index schema
pub mod index;
/// Shared pretty-JSON read and write helpers
pub mod json;
/// Slice manifest schema
pub mod manifest;
