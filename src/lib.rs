//! Mosaic layout engine for arranging news story tiles on a column grid
//!
//! Given an article count and a column count, the engine assigns each article
//! a rectangular tile shape via weighted random selection with ordered
//! degradation, packs the tiles into a collision-free grid, and converts
//! shapes to pixel dimensions for rendering.

#![forbid(unsafe_code)]

/// Shape selection policies and the placement driver
pub mod algorithm;
/// Distribution statistics over generated layouts
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Tiling rules document model, validation, and overrides
pub mod rules;
/// Pixel sizing and responsive column helpers
pub mod sizing;
/// Grid occupancy and placed tile data structures
pub mod spatial;

pub use algorithm::executor::{MosaicLayout, generate_mosaic};
pub use io::error::{MosaicError, Result};
pub use rules::model::TilingRules;
pub use rules::overrides::RulesOverride;
pub use spatial::grid::MosaicGrid;
