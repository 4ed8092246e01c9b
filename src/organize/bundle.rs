//! Bundle sequencing: plan, copy, assemble, infer, and write the index

use crate::document::config::{ConnectSpec, OrganizeConfig};
use crate::document::index::{
    BundleIndex, GroupResult, GroupTile, INDEX_FILENAME, TileAssignment,
};
use crate::document::manifest::MANIFEST_FILENAME;
use crate::io::error::{Result, TilesetError, config_error};
use crate::io::progress::ProgressReporter;
use crate::organize::assigner::{self, GroupPlan};
use crate::organize::catalog::TileCatalog;
use crate::organize::{edges, layout};
use image::RgbaImage;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Validated top-level bundle fields plus the output root
///
/// Constructing the writer is the incomplete-bundle check: it fails
/// before any group work when a required field is absent, so an invalid
/// configuration produces no output at all.
#[derive(Debug)]
pub struct BundleWriter {
    tileset_id: String,
    source: String,
    tile_size: [u32; 2],
    out_root: PathBuf,
}

impl BundleWriter {
    /// Validate the required top-level configuration fields
    ///
    /// # Errors
    ///
    /// Returns an incomplete-bundle error naming the first missing field
    pub fn new(config: &OrganizeConfig, out_root: Option<PathBuf>) -> Result<Self> {
        let tileset_id = config
            .tileset_id
            .clone()
            .ok_or(TilesetError::IncompleteBundle {
                field: "tileset_id",
            })?;
        let source = config
            .source_image
            .clone()
            .ok_or(TilesetError::IncompleteBundle {
                field: "source_image",
            })?;
        let tile_size = config
            .tile_size
            .ok_or(TilesetError::IncompleteBundle { field: "tile_size" })?;
        let out_root =
            out_root.unwrap_or_else(|| Path::new("organized_tilesets").join(&tileset_id));
        Ok(Self {
            tileset_id,
            source,
            tile_size,
            out_root,
        })
    }

    /// The output root groups and the index are written under
    pub fn out_root(&self) -> &Path {
        &self.out_root
    }

    /// Tile dimensions in pixels
    pub const fn tile_size(&self) -> [u32; 2] {
        self.tile_size
    }

    /// Assemble the final index document and write it to the output root
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized or written
    pub fn write_index(
        &self,
        tiles: BTreeMap<u32, TileAssignment>,
        groups: Vec<GroupResult>,
        unassigned: Vec<u32>,
    ) -> Result<BundleIndex> {
        let index = BundleIndex {
            tileset_id: self.tileset_id.clone(),
            source: self.source.clone(),
            tile_size: self.tile_size,
            tiles,
            groups,
            unassigned,
        };
        index.save(&self.out_root.join(INDEX_FILENAME))?;
        Ok(index)
    }
}

/// Outcome of an organize run
#[derive(Debug)]
pub struct OrganizeSummary {
    /// Output root containing the group directories and index document
    pub out_root: PathBuf,
    /// The bundle index, as written
    pub index: BundleIndex,
}

/// Run the full organize pipeline for one configuration
///
/// Sequence: validate the top-level fields, load the catalog, plan every
/// group, then per group in configuration order copy tiles, assemble the
/// layout, and infer edge matches, and finally write `tileset.json`.
/// Planning precedes all writes, so configuration errors leave the
/// filesystem untouched. With `overwrite`, an existing output root is
/// removed once planning has succeeded.
///
/// # Errors
///
/// Returns the first error encountered; the bundle index is only written
/// when every group succeeded
pub fn organize(
    config: &OrganizeConfig,
    out_root: Option<PathBuf>,
    overwrite: bool,
    progress: &mut ProgressReporter,
) -> Result<OrganizeSummary> {
    let writer = BundleWriter::new(config, out_root)?;

    let sliced_dir = config
        .sliced_dir
        .clone()
        .ok_or_else(|| config_error(&"sliced_dir is required"))?;
    let catalog = TileCatalog::load(&sliced_dir.join(MANIFEST_FILENAME))?;

    let plans = assigner::plan_groups(&catalog, &config.groups)?;

    if overwrite && writer.out_root().exists() {
        fs::remove_dir_all(writer.out_root()).map_err(|e| TilesetError::FileSystem {
            path: writer.out_root().to_path_buf(),
            operation: "remove directory",
            source: e,
        })?;
    }
    fs::create_dir_all(writer.out_root()).map_err(|e| TilesetError::FileSystem {
        path: writer.out_root().to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    progress.begin(plans.len() as u64, "Organizing");
    let mut tiles_map: BTreeMap<u32, TileAssignment> = BTreeMap::new();
    let mut groups_out = Vec::with_capacity(plans.len());

    for plan in &plans {
        groups_out.push(process_group(&catalog, &writer, plan, &mut tiles_map)?);
        progress.step();
    }
    progress.finish();

    let unassigned: Vec<u32> = catalog
        .indices()
        .filter(|index| !tiles_map.contains_key(index))
        .collect();

    let index = writer.write_index(tiles_map, groups_out, unassigned)?;
    Ok(OrganizeSummary {
        out_root: writer.out_root.clone(),
        index,
    })
}

fn process_group(
    catalog: &TileCatalog,
    writer: &BundleWriter,
    plan: &GroupPlan,
    tiles_map: &mut BTreeMap<u32, TileAssignment>,
) -> Result<GroupResult> {
    assigner::copy_group_tiles(catalog, plan, writer.out_root())?;

    let mut members: Vec<GroupTile> = plan
        .tiles
        .iter()
        .map(|tile| GroupTile {
            index: tile.index,
            sheet_x: tile.sheet.0,
            sheet_y: tile.sheet.1,
            x: tile.local[0],
            y: tile.local[1],
            file: plan.relative_file(tile),
        })
        .collect();

    for member in &members {
        tiles_map.insert(
            member.index,
            TileAssignment {
                group: plan.id.clone(),
                file: member.file.clone(),
                sheet_x: member.sheet_x,
                sheet_y: member.sheet_y,
                x: member.x,
                y: member.y,
            },
        );
    }

    members.sort_by_key(|tile| (tile.y, tile.x, tile.index));

    let mut result = GroupResult {
        id: plan.id.clone(),
        base_name: plan.base_name.clone(),
        connect: plan.connect.clone(),
        tiles: members,
        layout: None,
        assembled: None,
        edge_matches: None,
    };

    match plan.connect {
        Some(ConnectSpec::Layout) => {
            let bitmaps = load_bitmaps(catalog, plan, true)?;
            if let Some((composite, doc)) =
                layout::assemble_layout(plan, &bitmaps, writer.tile_size())?
            {
                let path = writer.out_root().join(&plan.id).join("assembled.png");
                composite.save(&path).map_err(|e| TilesetError::ImageExport {
                    path: path.clone(),
                    source: e,
                })?;
                result.layout = Some(doc);
                result.assembled = Some(format!("{}/assembled.png", plan.id));
            }
        }
        Some(ConnectSpec::EdgeMatch { top_k }) => {
            let bitmaps = load_bitmaps(catalog, plan, false)?;
            result.edge_matches = Some(edges::infer_edge_matches(
                &plan.id,
                &bitmaps,
                writer.tile_size(),
                top_k,
            )?);
        }
        None => {}
    }

    Ok(result)
}

/// Open the source bitmaps a group's connection step needs
fn load_bitmaps(
    catalog: &TileCatalog,
    plan: &GroupPlan,
    positioned_only: bool,
) -> Result<BTreeMap<u32, RgbaImage>> {
    plan.tiles
        .iter()
        .filter(|tile| !positioned_only || tile.explicit_pos)
        .map(|tile| Ok((tile.index, catalog.open_bitmap(tile.index)?)))
        .collect()
}
