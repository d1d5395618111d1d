//! Tile shape catalog shared read-only by all placement operations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for the closed set of supported tile shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShapeId {
    /// Single-cell square tile
    #[serde(rename = "1x1")]
    Square,
    /// Two cells wide, one cell tall
    #[serde(rename = "2x1")]
    Wide,
    /// One cell wide, two cells tall
    #[serde(rename = "1x2")]
    Tall,
    /// Two-by-two feature tile
    #[serde(rename = "2x2")]
    Feature,
}

impl ShapeId {
    /// Canonical identifier as written in the rules document
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Square => "1x1",
            Self::Wide => "2x1",
            Self::Tall => "1x2",
            Self::Feature => "2x2",
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable shape descriptor from the rules document
///
/// Shapes are configuration: loaded once, then shared read-only by every
/// placement run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileShape {
    /// Shape identifier
    pub id: ShapeId,
    /// Width in grid cells
    pub width: usize,
    /// Height in grid cells
    pub height: usize,
    /// Relative weight for stochastic selection
    pub weight: f64,
    /// Human-readable label with no behavioral effect
    pub description: String,
}

impl TileShape {
    /// Number of grid cells covered by this shape
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }
}
