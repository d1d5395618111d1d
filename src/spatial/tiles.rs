//! Placed tile records and cell addressing

use serde::{Deserialize, Serialize};

use crate::rules::shapes::TileShape;

/// Row/column address of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based row index
    pub row: usize,
    /// Zero-based column index
    pub col: usize,
}

impl Position {
    /// Create a cell address
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A tile fixed to the grid with its assigned article slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedTile {
    /// Stable identifier, unique within one layout
    pub id: String,
    /// Shape assigned to the tile
    pub shape: TileShape,
    /// Top-left cell of the tile's span
    pub position: Position,
    /// Index into the caller's article list, assigned in placement order
    pub article_index: usize,
}

impl PlacedTile {
    /// Iterate every cell covered by this tile
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        cell_span(self.position, self.shape.width, self.shape.height)
    }
}

/// Iterate the cells of a `width` x `height` span anchored at `origin`
pub fn cell_span(origin: Position, width: usize, height: usize) -> impl Iterator<Item = Position> {
    (origin.row..origin.row + height)
        .flat_map(move |row| (origin.col..origin.col + width).map(move |col| Position { row, col }))
}
