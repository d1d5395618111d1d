//! Command-line interface for generating and inspecting mosaic layouts

use clap::Parser;
use std::path::PathBuf;

use crate::algorithm::executor::MosaicLayout;
use crate::analysis::statistics::LayoutStatistics;
use crate::io::configuration::{
    DEFAULT_COLUMNS, DEFAULT_CONTAINER_WIDTH_PX, DEFAULT_SEED, DEFAULT_STATS_RUNS,
};
use crate::io::error::Result;
use crate::io::export::{export_layout_json, render_layout_text};
use crate::io::progress::ProgressManager;
use crate::rules::model::TilingRules;
use crate::rules::overrides::RulesOverride;
use crate::sizing::dimensions::calculate_tile_dimensions;
use crate::sizing::responsive::{columns_for_width, readable_columns};
use crate::spatial::grid::MosaicGrid;

#[derive(Parser)]
#[command(name = "newsmosaic")]
#[command(version, about = "Generate mosaic tile layouts for news headlines")]
/// Command-line arguments for the layout tool
pub struct Cli {
    /// Number of articles to lay out
    #[arg(short, long, default_value_t = 20)]
    pub articles: usize,

    /// Grid column count (derived from --width when omitted)
    #[arg(short, long)]
    pub columns: Option<usize>,

    /// Container width in pixels for responsive column selection
    #[arg(short = 'w', long)]
    pub width: Option<f64>,

    /// Random seed for reproducible layouts
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Rules override document merged over the built-in defaults
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Write the layout as JSON to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sample this many layouts and report the shape distribution
    #[arg(long, value_name = "RUNS")]
    pub stats: Option<usize>,

    /// Show per-shape pixel dimensions for the chosen container width
    #[arg(short = 'd', long)]
    pub dimensions: bool,

    /// Suppress progress and preview output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates layout generation according to CLI arguments
pub struct LayoutProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl LayoutProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the requested operation
    ///
    /// # Errors
    ///
    /// Returns an error if the rules document cannot be loaded or merged, or
    /// if output cannot be written
    pub fn process(&mut self) -> Result<()> {
        let rules = self.load_rules()?;
        let columns = self.resolve_columns(&rules);

        if let Some(runs) = self.cli.stats {
            return self.run_statistics(rules, columns, runs);
        }
        self.run_single(rules, columns)
    }

    fn load_rules(&self) -> Result<TilingRules> {
        let base = TilingRules::load()?;

        match &self.cli.rules {
            Some(path) => {
                let overrides = RulesOverride::from_path(path)?;
                base.merged(&overrides)
            }
            None => Ok(base),
        }
    }

    fn resolve_columns(&self, rules: &TilingRules) -> usize {
        if let Some(columns) = self.cli.columns {
            return columns.max(1);
        }

        self.cli.width.map_or(DEFAULT_COLUMNS, |width| {
            let requested = columns_for_width(&rules.grid_config, width);
            readable_columns(width, requested, rules.grid_config.gap_px)
        })
    }

    fn run_single(&self, rules: TilingRules, columns: usize) -> Result<()> {
        let mut layout = MosaicLayout::new(rules, self.cli.seed);
        let grid = layout.generate(self.cli.articles, columns);

        if !self.cli.quiet {
            print_preview(&grid, self.cli.articles);
        }

        if self.cli.dimensions {
            let container_width = self.cli.width.unwrap_or(DEFAULT_CONTAINER_WIDTH_PX);
            print_dimensions(layout.rules(), columns, container_width);
        }

        if let Some(path) = &self.cli.output {
            export_layout_json(&grid, path)?;
        }

        Ok(())
    }

    fn run_statistics(&mut self, rules: TilingRules, columns: usize, runs: usize) -> Result<()> {
        let runs = if runs == 0 { DEFAULT_STATS_RUNS } else { runs };

        if let Some(pm) = &mut self.progress_manager {
            pm.initialize(runs);
        }

        let mut statistics = LayoutStatistics::default();
        let mut layout = MosaicLayout::new(rules, self.cli.seed);

        for _ in 0..runs {
            let grid = layout.generate(self.cli.articles, columns);
            statistics.record(&grid);

            if let Some(pm) = &self.progress_manager {
                pm.update();
            }
        }

        if let Some(pm) = &self.progress_manager {
            pm.finish();
        }

        print_statistics(&statistics, columns);
        Ok(())
    }
}

// Terminal output is the point of the tool
#[allow(clippy::print_stdout)]
fn print_preview(grid: &MosaicGrid, requested: usize) {
    let preview = render_layout_text(grid);
    if !preview.is_empty() {
        println!("{preview}");
        println!();
    }
    println!(
        "{} of {requested} articles placed over {} columns",
        grid.tiles.len(),
        grid.columns
    );
}

#[allow(clippy::print_stdout)]
fn print_dimensions(rules: &TilingRules, columns: usize, container_width: f64) {
    println!("tile dimensions at {container_width:.0}px / {columns} columns:");
    for shape in &rules.tile_shapes {
        let dims = calculate_tile_dimensions(shape, &rules.grid_config, columns, container_width);
        println!("  {:>3}: {:.0} x {:.0} px", shape.id, dims.width, dims.height);
    }
}

#[allow(clippy::print_stdout)]
fn print_statistics(statistics: &LayoutStatistics, columns: usize) {
    println!("{}", statistics.summary());
    println!("mean fill:       {:.1}%", statistics.mean_fill(columns) * 100.0);
}
