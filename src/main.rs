//! CLI entry point for the mosaic layout tool

use clap::Parser;
use newsmosaic::io::cli::{Cli, LayoutProcessor};

fn main() -> newsmosaic::Result<()> {
    let cli = Cli::parse();
    let mut processor = LayoutProcessor::new(cli);
    processor.process()
}
