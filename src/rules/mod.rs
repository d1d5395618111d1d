//! Tiling rules: the configuration model consumed by the placement algorithm
//!
//! This module contains configuration-related functionality including:
//! - The shape catalog and its identifiers
//! - The rules document model with validation
//! - Partial override merging for testing and experimentation

/// Rules document model, validation, and embedded defaults
pub mod model;
/// Partial rule overrides and deep merging
pub mod overrides;
/// Tile shape catalog types
pub mod shapes;

pub use model::TilingRules;
pub use overrides::RulesOverride;
