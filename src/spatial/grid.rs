//! Mosaic grid occupancy state for a single placement run
//!
//! The grid is created fresh per generation call and discarded afterwards;
//! nothing is shared between runs. Columns are fixed for the run while rows
//! grow without bound as tiles are placed.

use serde::{Serialize, Serializer};
use std::collections::HashSet;

use crate::rules::shapes::TileShape;
use crate::spatial::tiles::{PlacedTile, Position, cell_span};

/// Working grid state for one placement run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicGrid {
    /// Fixed column count for the run
    pub columns: usize,
    /// Tiles in placement order
    pub tiles: Vec<PlacedTile>,
    /// Cells claimed by placed tiles
    #[serde(serialize_with = "sorted_cells")]
    pub occupied_cells: HashSet<Position>,
}

// Exported documents must not depend on hash iteration order
fn sorted_cells<S>(cells: &HashSet<Position>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut ordered: Vec<&Position> = cells.iter().collect();
    ordered.sort();
    serializer.collect_seq(ordered)
}

impl MosaicGrid {
    /// Create an empty grid, clamping the column count to at least one
    ///
    /// A zero column count cannot hold even a single-cell tile, so it
    /// degrades to one column rather than erroring: layout must always
    /// produce something renderable.
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            tiles: Vec::new(),
            occupied_cells: HashSet::new(),
        }
    }

    /// Whether a shape placed at `position` stays inside the column boundary
    /// and collides with no occupied cell
    ///
    /// A shape wider than the grid fails the boundary check at every column,
    /// so it can never fit in this grid.
    pub fn can_fit(&self, shape: &TileShape, position: Position) -> bool {
        if position.col + shape.width > self.columns {
            return false;
        }
        cell_span(position, shape.width, shape.height)
            .all(|cell| !self.occupied_cells.contains(&cell))
    }

    /// Whether a single cell is unclaimed
    pub fn is_free(&self, position: Position) -> bool {
        !self.occupied_cells.contains(&position)
    }

    /// Claim the tile's full cell span and record it
    pub fn place(&mut self, tile: PlacedTile) {
        for cell in cell_span(tile.position, tile.shape.width, tile.shape.height) {
            self.occupied_cells.insert(cell);
        }
        self.tiles.push(tile);
    }

    /// Scan forward from `start` for the next unoccupied cell
    ///
    /// Advances column by column, wrapping to the next row at the column
    /// boundary. The scan gives up once it has moved `max_scan_rows` rows
    /// past the starting row; `None` means no more space is reachable.
    pub fn find_next_empty_cell(&self, start: Position, max_scan_rows: usize) -> Option<Position> {
        let mut row = start.row;
        let mut col = start.col;

        loop {
            let cell = Position::new(row, col);
            if self.is_free(cell) {
                return Some(cell);
            }

            col += 1;
            if col >= self.columns {
                col = 0;
                row += 1;
            }

            if row > start.row + max_scan_rows {
                return None;
            }
        }
    }

    /// Number of rows touched by placed tiles
    pub fn row_count(&self) -> usize {
        self.tiles
            .iter()
            .map(|tile| tile.position.row + tile.shape.height)
            .max()
            .unwrap_or(0)
    }
}
