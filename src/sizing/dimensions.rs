//! Pixel dimension calculation for tile shapes

use crate::rules::model::GridConfig;
use crate::rules::shapes::TileShape;

/// Concrete pixel footprint of a tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileDimensions {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

/// Pixel size of one grid cell for the given container width
///
/// Degenerate container widths (zero, negative, or non-finite) clamp to the
/// configured minimum rather than propagating a nonsensical dimension.
pub fn base_tile_size(config: &GridConfig, columns: usize, container_width: f64) -> f64 {
    let columns = columns.max(1);

    if !container_width.is_finite() || container_width <= 0.0 {
        return config.min_tile_size_px;
    }

    let total_gaps = (columns - 1) as f64 * config.gap_px;
    let available_width = container_width - total_gaps;

    (available_width / columns as f64).max(config.min_tile_size_px)
}

/// Pixel dimensions for a shape spanning one or more cells
///
/// A tile spanning `w` cells also absorbs the `w - 1` gaps between them, so
/// multi-cell tiles line up exactly with their single-cell neighbors.
pub fn calculate_tile_dimensions(
    shape: &TileShape,
    config: &GridConfig,
    columns: usize,
    container_width: f64,
) -> TileDimensions {
    let base = base_tile_size(config, columns, container_width);

    TileDimensions {
        width: base.mul_add(
            shape.width as f64,
            shape.width.saturating_sub(1) as f64 * config.gap_px,
        ),
        height: base.mul_add(
            shape.height as f64,
            shape.height.saturating_sub(1) as f64 * config.gap_px,
        ),
    }
}
