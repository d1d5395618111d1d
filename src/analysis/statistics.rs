//! Aggregate distribution statistics over generated layouts

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::rules::shapes::ShapeId;
use crate::spatial::grid::MosaicGrid;

/// Accumulated metrics across one or more layouts
///
/// Used to compare the realized shape distribution against the configured
/// catalog weights over many seeded runs.
#[derive(Debug, Clone, Default)]
pub struct LayoutStatistics {
    /// Number of layouts recorded
    pub runs: usize,
    /// Total tiles placed across all runs
    pub tiles_placed: usize,
    /// Placement counts per shape id
    pub shape_counts: BTreeMap<ShapeId, usize>,
    /// Total cells claimed across all runs
    pub cells_occupied: usize,
    /// Total rows spanned across all runs
    pub rows_used: usize,
}

impl LayoutStatistics {
    /// Record one generated layout
    pub fn record(&mut self, grid: &MosaicGrid) {
        self.runs += 1;
        self.tiles_placed += grid.tiles.len();
        self.cells_occupied += grid.occupied_cells.len();
        self.rows_used += grid.row_count();

        for tile in &grid.tiles {
            *self.shape_counts.entry(tile.shape.id).or_default() += 1;
        }
    }

    /// Fraction of placements that used the given shape
    pub fn shape_ratio(&self, id: ShapeId) -> f64 {
        if self.tiles_placed == 0 {
            return 0.0;
        }
        self.shape_counts.get(&id).copied().unwrap_or(0) as f64 / self.tiles_placed as f64
    }

    /// Fraction of grid cells filled within the rows the layouts used
    pub fn mean_fill(&self, columns: usize) -> f64 {
        let capacity = self.rows_used * columns.max(1);
        if capacity == 0 {
            return 0.0;
        }
        self.cells_occupied as f64 / capacity as f64
    }

    /// Mean rows spanned per layout
    pub fn mean_rows(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.rows_used as f64 / self.runs as f64
    }

    /// Multi-line human-readable summary of the recorded distribution
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "layouts sampled: {}", self.runs);
        let _ = writeln!(out, "tiles placed:    {}", self.tiles_placed);
        let _ = writeln!(out, "mean rows:       {:.1}", self.mean_rows());

        for (id, count) in &self.shape_counts {
            let _ = writeln!(
                out,
                "  {:>3}: {:>7}  ({:>5.1}%)",
                id,
                count,
                self.shape_ratio(*id) * 100.0
            );
        }

        out.trim_end().to_string()
    }
}
