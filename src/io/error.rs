//! Error types shared across the tileset pipeline

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tileset operations
#[derive(Debug)]
pub enum TilesetError {
    /// Organize configuration is malformed or self-contradictory
    Config {
        /// Description of what's wrong with the configuration
        reason: String,
    },

    /// Tile catalog (slice manifest) is structurally invalid
    Catalog {
        /// Description of what's wrong with the catalog
        reason: String,
    },

    /// Group configuration references a tile index absent from the catalog
    MissingTile {
        /// Group whose member list names the index
        group: String,
        /// The unknown tile index
        index: u32,
    },

    /// Two tiles in one group resolved to the same local cell
    DuplicatePosition {
        /// Group in which the collision occurred
        group: String,
        /// The contested local (x, y) cell
        position: [i32; 2],
        /// Tile index that claimed the cell first
        first: u32,
        /// Tile index that collided with it
        second: u32,
    },

    /// A group member's bitmap doesn't match the declared tile size
    DimensionMismatch {
        /// Group being processed
        group: String,
        /// Expected (width, height) from the bundle's tile size
        expected: (u32, u32),
        /// Offending tile index
        index: u32,
        /// Actual decoded (width, height)
        found: (u32, u32),
    },

    /// Bundle index cannot be produced because a required field is absent
    IncompleteBundle {
        /// Name of the missing top-level field
        field: &'static str,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Failed to parse or serialize a JSON document
    Json {
        /// Path to the document
        path: PathBuf,
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TilesetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { reason } => {
                write!(f, "Invalid configuration: {reason}")
            }
            Self::Catalog { reason } => {
                write!(f, "Invalid tile catalog: {reason}")
            }
            Self::MissingTile { group, index } => {
                write!(
                    f,
                    "Group '{group}' references tile {index} which is not in the catalog"
                )
            }
            Self::DuplicatePosition {
                group,
                position,
                first,
                second,
            } => {
                write!(
                    f,
                    "Group '{group}' places tiles {first} and {second} at the same cell ({}, {})",
                    position[0], position[1]
                )
            }
            Self::DimensionMismatch {
                group,
                expected,
                index,
                found,
            } => {
                write!(
                    f,
                    "Group '{group}': tile {index} is {}x{}, expected {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
            }
            Self::IncompleteBundle { field } => {
                write!(f, "Bundle index is missing required field '{field}'")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Json { path, source } => {
                write!(f, "Invalid JSON in '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilesetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, TilesetError>;

/// Create a configuration error
pub fn config_error(reason: &impl ToString) -> TilesetError {
    TilesetError::Config {
        reason: reason.to_string(),
    }
}

/// Create a catalog error
pub fn catalog_error(reason: &impl ToString) -> TilesetError {
    TilesetError::Catalog {
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation that produced it
pub const fn fs_error(
    path: PathBuf,
    operation: &'static str,
    source: std::io::Error,
) -> TilesetError {
    TilesetError::FileSystem {
        path,
        operation,
        source,
    }
}
