//! Command-line interface for the tileset pipeline

use crate::document::config::OrganizeConfig;
use crate::document::manifest::{MANIFEST_FILENAME, SliceManifest};
use crate::io::error::Result;
use crate::io::progress::ProgressReporter;
use crate::organize::bundle;
use crate::overview::sheet::{self, LabelMode, OverviewOptions};
use crate::sheet::grid::SliceSpec;
use crate::sheet::slicer::{self, SliceOptions};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Default tile edge length in pixels
const DEFAULT_TILE_EDGE: u32 = 16;
/// Default nearest-neighbor scale for overview cells
const DEFAULT_OVERVIEW_SCALE: u32 = 8;
/// Default gutter between overview cells
const DEFAULT_OVERVIEW_PAD: u32 = 6;
/// Default pixel scale for overview label glyphs
const DEFAULT_LABEL_SCALE: u32 = 2;

#[derive(Parser)]
#[command(name = "tilebundle")]
#[command(
    author,
    version,
    about = "Slice, organize, and summarize tileset images"
)]
/// Command-line arguments for the tileset pipeline
pub struct Cli {
    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Pipeline stage to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Pipeline stages
#[derive(Subcommand)]
pub enum Command {
    /// Cut a tileset image into per-tile PNGs plus a manifest
    Slice(SliceArgs),
    /// Group sliced tiles and infer connection metadata
    Organize(OrganizeArgs),
    /// Render a labeled contact sheet from a slice manifest
    Overview(OverviewArgs),
}

/// Arguments for the `slice` subcommand
#[derive(Args)]
pub struct SliceArgs {
    /// Input tileset PNG
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Tile width in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_EDGE)]
    pub tile_w: u32,

    /// Tile height in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_EDGE)]
    pub tile_h: u32,

    /// Left margin in pixels
    #[arg(long, default_value_t = 0)]
    pub margin_x: u32,

    /// Top margin in pixels
    #[arg(long, default_value_t = 0)]
    pub margin_y: u32,

    /// Horizontal spacing between tiles
    #[arg(long, default_value_t = 0)]
    pub spacing_x: u32,

    /// Vertical spacing between tiles
    #[arg(long, default_value_t = 0)]
    pub spacing_y: u32,

    /// Output directory (default: sliced_tilesets/<stem>_<w>x<h>)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Skip tiles that are fully transparent or white
    #[arg(long)]
    pub trim_empty: bool,

    /// Convert pure white pixels (#ffffff) to alpha 0 before saving
    #[arg(long)]
    pub transparent_white: bool,
}

/// Arguments for the `organize` subcommand
#[derive(Args)]
pub struct OrganizeArgs {
    /// Config JSON defining groups and tile positions
    #[arg(long)]
    pub config: PathBuf,

    /// Output directory (default: organized_tilesets/<tileset_id>)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Remove the output directory first if it exists
    #[arg(long)]
    pub overwrite: bool,
}

/// Arguments for the `overview` subcommand
#[derive(Args)]
pub struct OverviewArgs {
    /// Directory containing tile PNGs and manifest.json
    #[arg(long)]
    pub sliced_dir: PathBuf,

    /// Manifest path (default: <sliced-dir>/manifest.json)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Output PNG path
    #[arg(long)]
    pub out: PathBuf,

    /// Nearest-neighbor scale for each tile
    #[arg(long, default_value_t = DEFAULT_OVERVIEW_SCALE)]
    pub scale: u32,

    /// Padding between cells in output pixels
    #[arg(long, default_value_t = DEFAULT_OVERVIEW_PAD)]
    pub pad: u32,

    /// Label under each tile
    #[arg(long, value_enum, default_value = "index-xy")]
    pub label: LabelMode,

    /// Pixel scale of the label glyphs
    #[arg(long, default_value_t = DEFAULT_LABEL_SCALE)]
    pub label_scale: u32,
}

/// Run the parsed command to completion
///
/// # Errors
///
/// Propagates the first pipeline error encountered
pub fn run(cli: Cli) -> Result<()> {
    let quiet = cli.quiet;
    match cli.command {
        Command::Slice(args) => run_slice(&args, quiet),
        Command::Organize(args) => run_organize(&args, quiet),
        Command::Overview(args) => run_overview(&args, quiet),
    }
}

// Allow print for user-facing completion summaries
#[allow(clippy::print_stderr)]
fn run_slice(args: &SliceArgs, quiet: bool) -> Result<()> {
    let spec = SliceSpec {
        tile_w: args.tile_w,
        tile_h: args.tile_h,
        margin_x: args.margin_x,
        margin_y: args.margin_y,
        spacing_x: args.spacing_x,
        spacing_y: args.spacing_y,
    };
    let options = SliceOptions {
        trim_empty: args.trim_empty,
        transparent_white: args.transparent_white,
    };
    let out_dir = args
        .out
        .clone()
        .unwrap_or_else(|| default_slice_dir(&args.image, &spec));

    let mut progress = ProgressReporter::new(!quiet);
    let summary = slicer::slice_sheet(&args.image, &out_dir, spec, options, &mut progress)?;

    if !quiet {
        eprintln!(
            "Sliced {} tiles ({} skipped) into '{}'",
            summary.kept,
            summary.skipped,
            summary.out_dir.display()
        );
    }
    Ok(())
}

fn default_slice_dir(image: &Path, spec: &SliceSpec) -> PathBuf {
    let stem = image.file_stem().unwrap_or_default().to_string_lossy();
    Path::new("sliced_tilesets").join(format!("{stem}_{}x{}", spec.tile_w, spec.tile_h))
}

// Allow print for user-facing completion summaries
#[allow(clippy::print_stderr)]
fn run_organize(args: &OrganizeArgs, quiet: bool) -> Result<()> {
    let config = OrganizeConfig::load(&args.config)?;
    let mut progress = ProgressReporter::new(!quiet);
    let summary = bundle::organize(&config, args.out.clone(), args.overwrite, &mut progress)?;

    if !quiet {
        eprintln!(
            "Organized {} groups covering {} tiles into '{}' ({} unassigned)",
            summary.index.groups.len(),
            summary.index.tiles.len(),
            summary.out_root.display(),
            summary.index.unassigned.len()
        );
    }
    Ok(())
}

// Allow print for user-facing completion summaries
#[allow(clippy::print_stderr)]
fn run_overview(args: &OverviewArgs, quiet: bool) -> Result<()> {
    let manifest_path = args
        .manifest
        .clone()
        .unwrap_or_else(|| args.sliced_dir.join(MANIFEST_FILENAME));
    let manifest = SliceManifest::load(&manifest_path)?;
    let options = OverviewOptions {
        scale: args.scale,
        pad: args.pad,
        label: args.label,
        label_scale: args.label_scale,
    };
    sheet::write_overview(&manifest, &args.sliced_dir, &args.out, &options)?;

    if !quiet {
        eprintln!("Wrote overview to '{}'", args.out.display());
    }
    Ok(())
}
