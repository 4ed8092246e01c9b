//! Shared JSON document reading and writing

use crate::io::error::{Result, TilesetError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and deserialize a JSON document from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as `T`
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|e| TilesetError::FileSystem {
        path: path.to_path_buf(),
        operation: "read document",
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| TilesetError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Serialize a value as pretty-printed JSON and write it to disk
///
/// Creates parent directories as needed. Output uses two-space
/// indentation and ends with a newline, so documents diff cleanly.
///
/// # Errors
///
/// Returns an error if serialization fails, the parent directory cannot
/// be created, or the file cannot be written
pub fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut text = serde_json::to_string_pretty(value).map_err(|e| TilesetError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    text.push('\n');

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| TilesetError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    fs::write(path, text).map_err(|e| TilesetError::FileSystem {
        path: path.to_path_buf(),
        operation: "write document",
        source: e,
    })
}
