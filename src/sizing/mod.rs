//! Pixel sizing for tiles and responsive column helpers

/// Shape-to-pixel dimension calculation
pub mod dimensions;
/// Breakpoint and readability based column selection
pub mod responsive;
