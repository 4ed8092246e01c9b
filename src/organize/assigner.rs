//! Group assignment: coordinate resolution, validation, and tile copying

use crate::document::config::{ConnectSpec, GroupSpec};
use crate::io::error::{Result, TilesetError, catalog_error, config_error};
use crate::organize::catalog::TileCatalog;
use crate::organize::naming;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One member tile with its placement and naming decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTile {
    /// Catalog index
    pub index: u32,
    /// Resolved group-local position
    pub local: [i32; 2],
    /// Whether the configuration carried an explicit position
    pub explicit_pos: bool,
    /// Output filename within the group directory
    pub filename: String,
    /// Sheet (column, row) from the catalog
    pub sheet: (u32, u32),
}

/// One group with every decision made and nothing written yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPlan {
    /// Group identifier, also its output subdirectory
    pub id: String,
    /// Resolved base name for coordinate filenames
    pub base_name: String,
    /// Connection metadata carried over from the configuration
    pub connect: Option<ConnectSpec>,
    /// Members in configuration order
    pub tiles: Vec<PlannedTile>,
}

impl GroupPlan {
    /// Output path of a member relative to the output root
    ///
    /// Group ids use `/` separators, so the result is portable across
    /// the documents this path lands in.
    pub fn relative_file(&self, tile: &PlannedTile) -> String {
        format!("{}/{}", self.id, tile.filename)
    }
}

/// Resolve and validate every group before any file is touched
///
/// Groups are planned in configuration order. A tile index consumed by
/// an earlier group may not appear again; this makes the bundle's
/// exactly-once membership property hold by construction.
///
/// # Errors
///
/// Returns the first configuration, missing-tile, or duplicate-position
/// error encountered; no side effects have happened by then
pub fn plan_groups(catalog: &TileCatalog, groups: &[GroupSpec]) -> Result<Vec<GroupPlan>> {
    let mut consumed: BTreeMap<u32, String> = BTreeMap::new();
    let mut plans = Vec::with_capacity(groups.len());
    for spec in groups {
        plans.push(plan_group(catalog, spec, &mut consumed)?);
    }
    Ok(plans)
}

fn plan_group(
    catalog: &TileCatalog,
    spec: &GroupSpec,
    consumed: &mut BTreeMap<u32, String>,
) -> Result<GroupPlan> {
    naming::validate_group_id(&spec.id)?;
    let base_name = spec
        .base_name
        .as_deref()
        .map_or_else(|| naming::default_base_name(&spec.id), naming::sanitize);

    if let Some(ConnectSpec::EdgeMatch { top_k: 0 }) = spec.connect {
        return Err(config_error(&format!(
            "group '{}': top_k must be at least 1",
            spec.id
        )));
    }

    // Anonymous members only make sense when there is nothing to number
    if spec.tiles.len() > 1
        && spec
            .tiles
            .iter()
            .any(|t| t.pos.is_none() && t.name.is_none())
    {
        return Err(config_error(&format!(
            "group '{}' has multiple tiles but some carry neither pos nor name",
            spec.id
        )));
    }

    let mut occupied: BTreeMap<[i32; 2], u32> = BTreeMap::new();
    let mut filenames: BTreeMap<String, u32> = BTreeMap::new();
    let mut tiles = Vec::with_capacity(spec.tiles.len());

    for member in &spec.tiles {
        let record = catalog
            .get(member.index)
            .ok_or_else(|| TilesetError::MissingTile {
                group: spec.id.clone(),
                index: member.index,
            })?;

        if let Some(owner) = consumed.insert(member.index, spec.id.clone()) {
            let reason = if owner == spec.id {
                format!("tile {} is listed twice in group '{}'", member.index, owner)
            } else {
                format!(
                    "tile {} appears in both '{}' and '{}'",
                    member.index, owner, spec.id
                )
            };
            return Err(config_error(&reason));
        }

        let local = match (member.pos, &member.name) {
            (Some(pos), _) => pos,
            (None, Some(_)) => [
                record.sheet_position.0 as i32,
                record.sheet_position.1 as i32,
            ],
            (None, None) => [0, 0],
        };

        if let Some(&first) = occupied.get(&local) {
            return Err(TilesetError::DuplicatePosition {
                group: spec.id.clone(),
                position: local,
                first,
                second: member.index,
            });
        }
        occupied.insert(local, member.index);

        let filename = member.name.as_deref().map_or_else(
            || naming::coordinate_filename(&base_name, local[0], local[1]),
            naming::named_filename,
        );
        if let Some(&other) = filenames.get(&filename) {
            return Err(config_error(&format!(
                "group '{}': tiles {} and {} both resolve to filename '{}'",
                spec.id, other, member.index, filename
            )));
        }
        filenames.insert(filename.clone(), member.index);

        tiles.push(PlannedTile {
            index: member.index,
            local,
            explicit_pos: member.pos.is_some(),
            filename,
            sheet: record.sheet_position,
        });
    }

    Ok(GroupPlan {
        id: spec.id.clone(),
        base_name,
        connect: spec.connect.clone(),
        tiles,
    })
}

/// Copy one planned group's bitmaps under the output root
///
/// Bitmaps are copied byte-for-byte, never re-encoded. The group
/// directory is created first, so nested group ids work without setup.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a copy fails
pub fn copy_group_tiles(catalog: &TileCatalog, plan: &GroupPlan, out_root: &Path) -> Result<()> {
    let group_dir = out_root.join(&plan.id);
    fs::create_dir_all(&group_dir).map_err(|e| TilesetError::FileSystem {
        path: group_dir.clone(),
        operation: "create directory",
        source: e,
    })?;

    for tile in &plan.tiles {
        let record = catalog
            .get(tile.index)
            .ok_or_else(|| catalog_error(&format!("tile {} is not in the catalog", tile.index)))?;
        let src = catalog.bitmap_path(record);
        let dst = group_dir.join(&tile.filename);
        fs::copy(&src, &dst).map_err(|e| TilesetError::FileSystem {
            path: dst.clone(),
            operation: "copy tile",
            source: e,
        })?;
    }
    Ok(())
}
