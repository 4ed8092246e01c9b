//! Input/output operations, CLI surface, and error handling

/// Command-line interface and subcommand runners
pub mod cli;
/// Error types and result alias
pub mod error;
/// Progress reporting for batch stages
pub mod progress;

pub use error::{Result, TilesetError};
