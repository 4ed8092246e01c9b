//! Output naming for groups and their tiles

use crate::io::error::{Result, config_error};
use std::path::{Component, Path};

/// Sanitize a name fragment for filesystem use
///
/// Lower-cases, collapses each run of non-alphanumeric characters to one
/// underscore, and trims leading and trailing underscores. An empty
/// result falls back to `"tile"`.
pub fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.trim().chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "tile".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Default base name for a group: its last `/`-segment, sanitized
pub fn default_base_name(group_id: &str) -> String {
    sanitize(group_id.rsplit('/').next().unwrap_or(group_id))
}

/// Coordinate filename for a tile within its group
pub fn coordinate_filename(base_name: &str, x: i32, y: i32) -> String {
    format!("{base_name}_{x:02}_{y:02}.png")
}

/// Filename for an explicitly named tile
pub fn named_filename(name: &str) -> String {
    format!("{}.png", sanitize(name))
}

/// Check that a group id can serve as a directory under the output root
///
/// Ids must be non-empty relative paths made of normal components, so
/// every write stays inside the output root.
///
/// # Errors
///
/// Returns a configuration error for empty, absolute, or traversing ids
pub fn validate_group_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(config_error(&"group id must not be empty"));
    }
    let all_normal = Path::new(id)
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if all_normal {
        Ok(())
    } else {
        Err(config_error(&format!(
            "group id '{id}' must be a relative path without parent components"
        )))
    }
}
