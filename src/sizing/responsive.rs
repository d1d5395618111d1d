//! Responsive column selection for varying container widths

use crate::io::configuration::{MIN_READABLE_TILE_PX, MOBILE_BREAKPOINT_PX, TABLET_BREAKPOINT_PX};
use crate::rules::model::GridConfig;

/// Column count for a container width using the configured breakpoints
pub fn columns_for_width(config: &GridConfig, container_width: f64) -> usize {
    if container_width < MOBILE_BREAKPOINT_PX {
        config.mobile_columns
    } else if container_width < TABLET_BREAKPOINT_PX {
        config.tablet_columns
    } else {
        config.desktop_columns
    }
}

/// Reduce the requested column count until each column stays readable
///
/// Headline text needs more room than the tap-target minimum in the grid
/// config, so columns are dropped one at a time until each column is at
/// least [`MIN_READABLE_TILE_PX`] wide. Unavailable container widths return
/// the request unchanged.
pub fn readable_columns(container_width: f64, requested_columns: usize, gap_px: f64) -> usize {
    let mut cols = requested_columns.max(1);

    if !container_width.is_finite() || container_width <= 0.0 {
        return cols;
    }

    while cols > 1 {
        let total_gaps = (cols - 1) as f64 * gap_px;
        let column_width = (container_width - total_gaps) / cols as f64;

        if column_width >= MIN_READABLE_TILE_PX {
            break;
        }

        cols -= 1;
    }

    cols.max(1)
}

/// Column width in whole pixels, floored to the readable minimum
pub fn readable_tile_size(container_width: f64, columns: usize, gap_px: f64) -> f64 {
    if !container_width.is_finite() || container_width <= 0.0 || columns == 0 {
        return MIN_READABLE_TILE_PX;
    }

    let total_gaps = (columns - 1) as f64 * gap_px;
    let column_width = ((container_width - total_gaps) / columns as f64).floor();

    column_width.max(MIN_READABLE_TILE_PX)
}
