//! Shape selection policies: weighted stochastic pick with ordered degradation

use rand::Rng;

use crate::rules::model::TilingRules;
use crate::rules::shapes::{ShapeId, TileShape};
use crate::spatial::grid::MosaicGrid;
use crate::spatial::tiles::Position;

/// Whether a feature tile at `position` would share an edge with a placed
/// feature tile
///
/// Two feature tiles are adjacent when aligned on one axis and offset by
/// exactly two cells on the other. Diagonal contact is allowed, and shapes
/// other than the 2x2 are exempt regardless of size.
pub fn is_adjacent_feature_tile(position: Position, grid: &MosaicGrid) -> bool {
    grid.tiles
        .iter()
        .filter(|tile| tile.shape.id == ShapeId::Feature)
        .any(|tile| {
            let same_row = tile.position.row == position.row;
            let same_col = tile.position.col == position.col;
            let row_gap = tile.position.row.abs_diff(position.row);
            let col_gap = tile.position.col.abs_diff(position.col);

            (same_row && col_gap == 2) || (same_col && row_gap == 2)
        })
}

/// Whether the shape passes the fit check and, for feature tiles, the
/// adjacency rule
fn placeable(
    shape: &TileShape,
    position: Position,
    grid: &MosaicGrid,
    rules: &TilingRules,
) -> bool {
    if !grid.can_fit(shape, position) {
        return false;
    }
    if shape.id == ShapeId::Feature
        && rules.placement_rules.avoid_adjacent_2x2
        && is_adjacent_feature_tile(position, grid)
    {
        return false;
    }
    true
}

/// Weighted stochastic shape pick, single attempt
///
/// Draws one uniform value against the cumulative catalog weights; the first
/// shape whose cumulative weight meets the draw is the preferred shape. If
/// the preferred shape cannot be placed the whole attempt fails with no
/// re-roll, bounding the work per cell: the caller falls back to degradation
/// instead of retrying randomly.
pub fn select_weighted_shape<'a, R: Rng>(
    rng: &mut R,
    position: Position,
    grid: &MosaicGrid,
    rules: &'a TilingRules,
) -> Option<&'a TileShape> {
    let total_weight = rules.total_weight();
    if total_weight <= 0.0 {
        return None;
    }

    let draw = rng.random::<f64>() * total_weight;

    let mut accumulated = 0.0;
    for shape in &rules.tile_shapes {
        accumulated += shape.weight;
        if draw <= accumulated {
            return placeable(shape, position, grid, rules).then_some(shape);
        }
    }

    None
}

/// Ordered degradation fallback
///
/// Walks the configured degrade order, most space-hungry shape first, and
/// returns the first shape passing the placement checks. Entries naming a
/// shape missing from the catalog are skipped. A catalog holding the
/// single-cell shape guarantees success on any unoccupied cell.
pub fn degrade_shape<'a>(
    position: Position,
    grid: &MosaicGrid,
    rules: &'a TilingRules,
) -> Option<&'a TileShape> {
    rules
        .placement_rules
        .degrade_order
        .iter()
        .filter_map(|&id| rules.shape(id))
        .find(|shape| placeable(shape, position, grid, rules))
}
