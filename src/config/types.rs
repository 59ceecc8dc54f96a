//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::Color;
use serde::{Deserialize, Serialize};

/// Stage (drawing surface) settings.
///
/// Dimensions act as the mount-time default; an embedding surface usually
/// overwrites them with its real viewport size once known.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StageConfig {
    /// Default stage width in pixels
    #[serde(default = "default_stage_width")]
    pub width: f64,

    /// Default stage height in pixels
    #[serde(default = "default_stage_height")]
    pub height: f64,

    /// Constrain dragged shapes so their bounding box stays on the stage
    #[serde(default = "default_clamp_to_stage")]
    pub clamp_to_stage: bool,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            width: default_stage_width(),
            height: default_stage_height(),
            clamp_to_stage: default_clamp_to_stage(),
        }
    }
}

/// Freehand stroke settings.
///
/// Controls the style each stroke tool applies to committed lines. Stroke
/// colors are per tool; a runtime line-color pick overrides all three.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StrokeConfig {
    /// Stroke width in pixels for all tools (valid range: 0.5 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub width: f64,

    /// Stroke color for the solid tool - a named color or `[r, g, b]` array
    #[serde(default = "default_solid_color")]
    pub solid_color: ColorSpec,

    /// Stroke color for the dashed tool
    #[serde(default = "default_dashed_color")]
    pub dashed_color: ColorSpec,

    /// Stroke color for the dotted tool
    #[serde(default = "default_dotted_color")]
    pub dotted_color: ColorSpec,

    /// Dash pattern for the dashed tool as alternating on/off lengths
    #[serde(default = "default_dashed_pattern")]
    pub dashed_pattern: Vec<f64>,

    /// Dash pattern for the dotted tool
    #[serde(default = "default_dotted_pattern")]
    pub dotted_pattern: Vec<f64>,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            width: default_stroke_width(),
            solid_color: default_solid_color(),
            dashed_color: default_dashed_color(),
            dotted_color: default_dotted_color(),
            dashed_pattern: default_dashed_pattern(),
            dotted_pattern: default_dotted_pattern(),
        }
    }
}

/// Default geometry for placed shapes.
///
/// Every shape is placed at (50, 50) with these sizes and dragged into place
/// afterwards.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ShapesConfig {
    /// Rectangle width in pixels (valid range: 1.0 - 1000.0)
    #[serde(default = "default_rect_side")]
    pub rect_width: f64,

    /// Rectangle height in pixels (valid range: 1.0 - 1000.0)
    #[serde(default = "default_rect_side")]
    pub rect_height: f64,

    /// Circle radius in pixels (valid range: 1.0 - 1000.0)
    #[serde(default = "default_circle_radius")]
    pub circle_radius: f64,

    /// Triangle circumradius in pixels (valid range: 1.0 - 1000.0)
    #[serde(default = "default_triangle_radius")]
    pub triangle_radius: f64,

    /// Fill applied when a shape is added without an explicit color
    #[serde(default = "default_fill")]
    pub default_fill: ColorSpec,

    /// Swatch palette offered by the circle color picker
    #[serde(default = "default_circle_swatches")]
    pub circle_swatches: Vec<ColorSpec>,
}

impl ShapesConfig {
    /// Resolves the circle swatch palette to concrete colors.
    pub fn swatch_colors(&self) -> Vec<Color> {
        self.circle_swatches.iter().map(ColorSpec::to_color).collect()
    }
}

impl Default for ShapesConfig {
    fn default() -> Self {
        Self {
            rect_width: default_rect_side(),
            rect_height: default_rect_side(),
            circle_radius: default_circle_radius(),
            triangle_radius: default_triangle_radius(),
            default_fill: default_fill(),
            circle_swatches: default_circle_swatches(),
        }
    }
}

/// Session limits.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LimitsConfig {
    /// Maximum number of committed entities (0 = unlimited)
    #[serde(default = "default_max_entities")]
    pub max_entities: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_entities: default_max_entities(),
        }
    }
}

fn default_stage_width() -> f64 {
    1280.0
}

fn default_stage_height() -> f64 {
    720.0
}

fn default_clamp_to_stage() -> bool {
    true
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_solid_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_dashed_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_dotted_color() -> ColorSpec {
    ColorSpec::Name("blue".to_string())
}

fn default_dashed_pattern() -> Vec<f64> {
    vec![10.0, 5.0]
}

fn default_dotted_pattern() -> Vec<f64> {
    vec![3.0, 3.0]
}

fn default_rect_side() -> f64 {
    50.0
}

fn default_circle_radius() -> f64 {
    25.0
}

fn default_triangle_radius() -> f64 {
    40.0
}

fn default_fill() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_circle_swatches() -> Vec<ColorSpec> {
    ["red", "green", "blue", "yellow", "orange", "pink"]
        .into_iter()
        .map(|name| ColorSpec::Name(name.to_string()))
        .collect()
}

fn default_max_entities() -> usize {
    0
}
