//! Layout export as JSON documents and terminal previews

use std::path::Path;

use crate::io::error::{MosaicError, Result};
use crate::spatial::grid::MosaicGrid;

/// Serialize a layout to pretty-printed JSON
///
/// Occupied cells are emitted in sorted order so the same layout always
/// produces the same document.
///
/// # Errors
///
/// Returns an error if JSON encoding fails
pub fn layout_to_json(grid: &MosaicGrid) -> Result<String> {
    serde_json::to_string_pretty(grid).map_err(|source| MosaicError::LayoutEncode { source })
}

/// Write a layout document to disk, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The layout cannot be encoded as JSON
/// - The parent directory cannot be created
/// - The document cannot be written to the target path
pub fn export_layout_json(grid: &MosaicGrid, output_path: &Path) -> Result<()> {
    let json = layout_to_json(grid)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
    }

    std::fs::write(output_path, json).map_err(|source| MosaicError::LayoutExport {
        path: output_path.to_path_buf(),
        source,
    })
}

/// Render the layout as a character grid, one letter per article
///
/// Tiles are drawn with the letters a-z cycling by article index; cells no
/// tile claimed print as dots. Returns an empty string for an empty layout.
pub fn render_layout_text(grid: &MosaicGrid) -> String {
    let rows = grid.row_count();
    let mut canvas = vec![vec!['.'; grid.columns]; rows];

    for tile in &grid.tiles {
        let glyph = glyph_for(tile.article_index);
        for cell in tile.cells() {
            if let Some(slot) = canvas
                .get_mut(cell.row)
                .and_then(|row| row.get_mut(cell.col))
            {
                *slot = glyph;
            }
        }
    }

    canvas
        .iter()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

const fn glyph_for(article_index: usize) -> char {
    let offset = (article_index % 26) as u8;
    (b'a' + offset) as char
}
