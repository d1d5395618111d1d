//! Partial rule overrides deep-merged over the built-in defaults
//!
//! Callers supply a subset of fields; unspecified fields retain the base
//! values. Nested sections merge field by field, while the shape catalog and
//! individual importance classes replace wholesale.

use serde::Deserialize;
use std::path::Path;

use crate::io::error::{MosaicError, Result};
use crate::rules::model::{
    FallbackStrategy, GridConfig, ImportanceModifier, ImportanceModifiers, PlacementRules,
    TilingRules,
};
use crate::rules::shapes::{ShapeId, TileShape};
use crate::spatial::tiles::Position;

/// Optional replacements for individual grid configuration fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfigOverride {
    /// Columns below the mobile breakpoint
    pub mobile_columns: Option<usize>,
    /// Columns below the tablet breakpoint
    pub tablet_columns: Option<usize>,
    /// Columns at desktop widths
    pub desktop_columns: Option<usize>,
    /// Minimum tile edge in pixels
    pub min_tile_size_px: Option<f64>,
    /// Gap between tiles in pixels
    pub gap_px: Option<f64>,
}

/// Optional replacements for individual placement policy fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRulesOverride {
    /// Cell where the placement scan begins
    pub start_position: Option<Position>,
    /// Behavior when the weighted pick fails its checks
    pub fallback_strategy: Option<FallbackStrategy>,
    /// Shape order tried during degradation
    pub degrade_order: Option<Vec<ShapeId>>,
    /// Forbid two feature tiles from sharing an edge
    pub avoid_adjacent_2x2: Option<bool>,
    /// Reserved orientation flag
    pub alternate_orientation: Option<bool>,
}

/// Optional replacements for whole importance classes
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportanceModifiersOverride {
    /// Breaking news class
    pub breaking_news: Option<ImportanceModifier>,
    /// Featured class
    pub featured: Option<ImportanceModifier>,
    /// Evergreen class
    pub evergreen: Option<ImportanceModifier>,
}

/// Partial rules document supplied by the caller
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesOverride {
    /// Grid configuration replacements
    #[serde(default)]
    pub grid_config: GridConfigOverride,
    /// Replacement shape catalog
    pub tile_shapes: Option<Vec<TileShape>>,
    /// Placement policy replacements
    #[serde(default)]
    pub placement_rules: PlacementRulesOverride,
    /// Importance class replacements
    #[serde(default)]
    pub importance_modifiers: ImportanceModifiersOverride,
}

impl RulesOverride {
    /// Parse an override document from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid override document
    pub fn from_json(source_name: &str, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| MosaicError::RulesDocument {
            source_name: source_name.to_string(),
            source,
        })
    }

    /// Read and parse an override document from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| MosaicError::FileSystem {
            path: path.to_path_buf(),
            operation: "read rules override",
            source,
        })?;
        Self::from_json(&path.display().to_string(), &json)
    }
}

impl TilingRules {
    /// Deep-merge a partial override over these rules
    ///
    /// # Errors
    ///
    /// Returns an error if the merged document fails validation
    pub fn merged(&self, overrides: &RulesOverride) -> Result<Self> {
        let grid = &overrides.grid_config;
        let placement = &overrides.placement_rules;
        let importance = &overrides.importance_modifiers;

        let merged = Self {
            grid_config: GridConfig {
                mobile_columns: grid.mobile_columns.unwrap_or(self.grid_config.mobile_columns),
                tablet_columns: grid.tablet_columns.unwrap_or(self.grid_config.tablet_columns),
                desktop_columns: grid
                    .desktop_columns
                    .unwrap_or(self.grid_config.desktop_columns),
                min_tile_size_px: grid
                    .min_tile_size_px
                    .unwrap_or(self.grid_config.min_tile_size_px),
                gap_px: grid.gap_px.unwrap_or(self.grid_config.gap_px),
            },
            tile_shapes: overrides
                .tile_shapes
                .clone()
                .unwrap_or_else(|| self.tile_shapes.clone()),
            placement_rules: PlacementRules {
                start_position: placement
                    .start_position
                    .unwrap_or(self.placement_rules.start_position),
                fallback_strategy: placement
                    .fallback_strategy
                    .unwrap_or(self.placement_rules.fallback_strategy),
                degrade_order: placement
                    .degrade_order
                    .clone()
                    .unwrap_or_else(|| self.placement_rules.degrade_order.clone()),
                avoid_adjacent_2x2: placement
                    .avoid_adjacent_2x2
                    .unwrap_or(self.placement_rules.avoid_adjacent_2x2),
                alternate_orientation: placement
                    .alternate_orientation
                    .unwrap_or(self.placement_rules.alternate_orientation),
            },
            importance_modifiers: ImportanceModifiers {
                breaking_news: importance
                    .breaking_news
                    .clone()
                    .unwrap_or_else(|| self.importance_modifiers.breaking_news.clone()),
                featured: importance
                    .featured
                    .clone()
                    .unwrap_or_else(|| self.importance_modifiers.featured.clone()),
                evergreen: importance
                    .evergreen
                    .clone()
                    .unwrap_or_else(|| self.importance_modifiers.evergreen.clone()),
            },
        };

        merged.validate()?;
        Ok(merged)
    }
}
