//! Tiling rules document model with validation and embedded defaults
//!
//! The rules document describes the shape catalog, grid geometry, and
//! placement policy. It is parsed and validated once at startup; a malformed
//! document is a configuration defect and fails fast rather than being
//! recovered from at layout time.

use serde::{Deserialize, Serialize};

use crate::io::error::{MosaicError, Result, invalid_rules};
use crate::rules::shapes::{ShapeId, TileShape};
use crate::spatial::tiles::Position;

/// Built-in rules document compiled into the crate
const DEFAULT_RULES_JSON: &str = include_str!("tiling_rules.json");

/// Per-breakpoint column counts and pixel geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    /// Columns used below the mobile breakpoint
    pub mobile_columns: usize,
    /// Columns used below the tablet breakpoint
    pub tablet_columns: usize,
    /// Columns used at desktop widths
    pub desktop_columns: usize,
    /// Minimum tile edge in pixels
    pub min_tile_size_px: f64,
    /// Gap between tiles in pixels
    pub gap_px: f64,
}

/// Fallback behavior when the weighted selection cannot be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackStrategy {
    /// Try shapes in the degrade order until one fits
    Degrade,
    /// Leave the cell unfilled and advance
    Skip,
}

/// Policy knobs consumed by the placement driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRules {
    /// Cell where the placement scan begins
    pub start_position: Position,
    /// Behavior when the weighted pick fails its checks
    pub fallback_strategy: FallbackStrategy,
    /// Shape order tried during degradation, most space-hungry first
    pub degrade_order: Vec<ShapeId>,
    /// Forbid two feature tiles from sharing an edge
    pub avoid_adjacent_2x2: bool,
    /// Reserved flag; not consulted by the current driver
    pub alternate_orientation: bool,
}

/// Shape preference attached to one article importance class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportanceModifier {
    /// Shapes favored for articles in this class
    pub preferred_shapes: Vec<ShapeId>,
    /// Multiplier applied to the preferred shape weights
    pub weight_multiplier: f64,
}

/// Importance classes carried in the document
///
/// Reserved: no article-importance signal reaches the shape selector, so
/// these values never influence placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportanceModifiers {
    /// Breaking news articles
    pub breaking_news: ImportanceModifier,
    /// Editorially featured articles
    pub featured: ImportanceModifier,
    /// Evergreen background articles
    pub evergreen: ImportanceModifier,
}

/// Complete validated tiling rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TilingRules {
    /// Column counts and pixel geometry
    pub grid_config: GridConfig,
    /// Shape catalog with selection weights
    pub tile_shapes: Vec<TileShape>,
    /// Placement policy
    pub placement_rules: PlacementRules,
    /// Reserved importance classes
    pub importance_modifiers: ImportanceModifiers,
}

impl TilingRules {
    /// Parse and validate the built-in rules document
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document fails to parse or violates
    /// a structural requirement
    pub fn load() -> Result<Self> {
        let rules: Self = serde_json::from_str(DEFAULT_RULES_JSON).map_err(|source| {
            MosaicError::RulesDocument {
                source_name: "<built-in>".to_string(),
                source,
            }
        })?;
        rules.validate()?;
        Ok(rules)
    }

    /// Find a shape in the catalog by id
    pub fn shape(&self, id: ShapeId) -> Option<&TileShape> {
        self.tile_shapes.iter().find(|shape| shape.id == id)
    }

    /// Sum of all catalog weights
    pub fn total_weight(&self) -> f64 {
        self.tile_shapes.iter().map(|shape| shape.weight).sum()
    }

    /// Check structural requirements of the document
    ///
    /// Degrade-order entries referencing shapes missing from the catalog are
    /// tolerated (they are skipped at runtime), but both the catalog and the
    /// degrade order must carry the universal single-cell shape so a free
    /// cell can always be filled.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first violated requirement
    pub fn validate(&self) -> Result<()> {
        if self.tile_shapes.is_empty() {
            return Err(invalid_rules(
                "tileShapes",
                &"[]",
                &"catalog must contain at least one shape",
            ));
        }

        for shape in &self.tile_shapes {
            if shape.width == 0 || shape.height == 0 {
                return Err(invalid_rules(
                    "tileShapes",
                    &shape.id,
                    &"shape dimensions must be at least one cell",
                ));
            }
            if !shape.weight.is_finite() || shape.weight < 0.0 {
                return Err(invalid_rules(
                    "tileShapes",
                    &shape.id,
                    &"shape weight must be finite and non-negative",
                ));
            }
        }

        if self.total_weight() <= 0.0 {
            return Err(invalid_rules(
                "tileShapes",
                &self.total_weight(),
                &"total shape weight must be positive",
            ));
        }

        if self.shape(ShapeId::Square).is_none() {
            return Err(invalid_rules(
                "tileShapes",
                &ShapeId::Square,
                &"catalog must include the universal single-cell shape",
            ));
        }

        let order = &self.placement_rules.degrade_order;
        if order.is_empty() {
            return Err(invalid_rules(
                "degradeOrder",
                &"[]",
                &"degrade order must name at least one shape",
            ));
        }
        if !order.contains(&ShapeId::Square) {
            return Err(invalid_rules(
                "degradeOrder",
                &ShapeId::Square,
                &"degrade order must include the universal single-cell shape",
            ));
        }

        let grid = &self.grid_config;
        if !grid.min_tile_size_px.is_finite() || grid.min_tile_size_px <= 0.0 {
            return Err(invalid_rules(
                "minTileSizePx",
                &grid.min_tile_size_px,
                &"minimum tile size must be positive",
            ));
        }
        if !grid.gap_px.is_finite() || grid.gap_px < 0.0 {
            return Err(invalid_rules(
                "gapPx",
                &grid.gap_px,
                &"gap must be finite and non-negative",
            ));
        }
        if grid.mobile_columns == 0 || grid.tablet_columns == 0 || grid.desktop_columns == 0 {
            return Err(invalid_rules(
                "gridConfig",
                &"columns",
                &"breakpoint column counts must be at least one",
            ));
        }

        Ok(())
    }
}
