//! CLI entry point for the tileset organization pipeline

use clap::Parser;
use tilebundle::io::cli::{self, Cli};

fn main() -> tilebundle::Result<()> {
    let cli = Cli::parse();
    cli::run(cli)
}
