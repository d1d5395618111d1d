//! Placement driver walking the grid in scan order
//!
//! Consumes an article count and a column count and produces a complete
//! collision-free layout. Each run owns a fresh grid; repeated calls share
//! nothing but the rules and the random stream.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::selection::{degrade_shape, select_weighted_shape};
use crate::io::configuration::MAX_SCAN_ROWS;
use crate::io::error::Result;
use crate::rules::model::{FallbackStrategy, TilingRules};
use crate::rules::overrides::RulesOverride;
use crate::spatial::grid::MosaicGrid;
use crate::spatial::tiles::{PlacedTile, Position};

/// Mosaic layout driver owning the rules and random source
///
/// The random source is injected so a fixed seed yields a fixed layout;
/// tests pin seeds, callers wanting visual variety pass a fresh one per
/// render.
pub struct MosaicLayout<R: Rng> {
    rules: TilingRules,
    rng: R,
}

impl MosaicLayout<StdRng> {
    /// Create a driver with a seeded random source
    pub fn new(rules: TilingRules, seed: u64) -> Self {
        Self {
            rules,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> MosaicLayout<R> {
    /// Create a driver with a caller-supplied random source
    pub const fn with_rng(rules: TilingRules, rng: R) -> Self {
        Self { rules, rng }
    }

    /// Borrow the active rules
    pub const fn rules(&self) -> &TilingRules {
        &self.rules
    }

    /// Generate a collision-free layout for `article_count` tiles
    ///
    /// Scans the grid in left-to-right, top-to-bottom order, attempting a
    /// weighted shape pick at each free cell and degrading to smaller shapes
    /// when the pick cannot be placed. Article indices are assigned in
    /// placement order.
    ///
    /// Returns a partial grid when the scan bound is exhausted before every
    /// article receives a tile; callers tolerate fewer tiles than requested.
    pub fn generate(&mut self, article_count: usize, columns: usize) -> MosaicGrid {
        let mut grid = MosaicGrid::new(columns);
        let mut cursor = self.rules.placement_rules.start_position;
        let mut articles_placed = 0;

        // Terminates runs whose strategy never manages to place anything
        let failure_bound = MAX_SCAN_ROWS.saturating_mul(grid.columns);
        let mut failed_cells = 0;

        while articles_placed < article_count {
            let Some(position) = grid.find_next_empty_cell(cursor, MAX_SCAN_ROWS) else {
                break;
            };
            cursor = position;

            let mut selected = select_weighted_shape(&mut self.rng, position, &grid, &self.rules);
            if selected.is_none()
                && self.rules.placement_rules.fallback_strategy == FallbackStrategy::Degrade
            {
                selected = degrade_shape(position, &grid, &self.rules);
            }

            if let Some(shape) = selected {
                let tile = PlacedTile {
                    id: format!("tile-{articles_placed}"),
                    shape: shape.clone(),
                    position,
                    article_index: articles_placed,
                };
                grid.place(tile);
                articles_placed += 1;
                failed_cells = 0;
            } else {
                failed_cells += 1;
                if failed_cells > failure_bound {
                    break;
                }
            }

            cursor = advance(cursor, grid.columns);
        }

        grid
    }
}

/// Advance the cursor one cell in scan order
const fn advance(cursor: Position, columns: usize) -> Position {
    let col = cursor.col + 1;
    if col >= columns {
        Position::new(cursor.row + 1, 0)
    } else {
        Position::new(cursor.row, col)
    }
}

/// Generate a mosaic using the built-in rules document
///
/// Convenience wrapper: loads the defaults, deep-merges any overrides, and
/// runs one seeded placement.
///
/// # Errors
///
/// Returns an error if the rules document fails to load or the merged
/// overrides do not validate
pub fn generate_mosaic(
    article_count: usize,
    columns: usize,
    overrides: Option<&RulesOverride>,
    seed: u64,
) -> Result<MosaicGrid> {
    let base = TilingRules::load()?;
    let rules = match overrides {
        Some(partial) => base.merged(partial)?,
        None => base,
    };

    Ok(MosaicLayout::new(rules, seed).generate(article_count, columns))
}
