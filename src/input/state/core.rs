//! Drawing state machine and canvas session state.

use crate::config::Config;
use crate::draw::{Board, Color, StrokeStyle};
use crate::input::tool::Tool;

/// Current interaction state machine.
///
/// Tracks whether the user is idle, has a stroke tool armed, or is actively
/// drawing a freehand stroke. State transitions occur based on tool-button
/// clicks and pointer events.
#[derive(Debug)]
pub enum DrawingState {
    /// No tool selected - pointer events do not draw
    Idle,
    /// A stroke tool is armed; the next pointer-down starts a stroke
    ToolSelected {
        /// Which tool will style the next stroke
        tool: Tool,
    },
    /// Actively drawing a stroke (pointer button held down)
    Drawing {
        /// Which tool is styling this stroke (may be swapped mid-draw;
        /// the committed line uses the tool active at pointer-up)
        tool: Tool,
        /// Accumulated points for the in-progress stroke
        points: Vec<(f64, f64)>,
    },
}

/// Main canvas state containing the complete drawing session.
///
/// Holds the board (committed entities plus undo history), the interaction
/// state machine, stage dimensions, and the style defaults resolved from
/// configuration. It processes all pointer and button events and flags when
/// the surface needs to re-render. It owns no rendering resources, so it is
/// fully testable without a rendering environment.
pub struct CanvasState {
    /// Committed entities and undo history
    pub board: Board,
    /// Current interaction state machine
    pub state: DrawingState,
    /// Whether the surface needs to be redrawn (cleared by the surface)
    pub needs_redraw: bool,
    /// Stage width in pixels (set by the surface at mount time)
    pub stage_width: f64,
    /// Stage height in pixels (set by the surface at mount time)
    pub stage_height: f64,
    /// Runtime line-color pick; overrides the per-tool defaults for all tools
    pub(crate) line_color_override: Option<Color>,
    /// Stroke width applied to every committed line
    pub(crate) stroke_width: f64,
    /// Default stroke color for the solid tool
    pub(crate) solid_color: Color,
    /// Default stroke color for the dashed tool
    pub(crate) dashed_color: Color,
    /// Default stroke color for the dotted tool
    pub(crate) dotted_color: Color,
    /// Dash pattern for the dashed tool
    pub(crate) dashed_pattern: Vec<f64>,
    /// Dash pattern for the dotted tool
    pub(crate) dotted_pattern: Vec<f64>,
    /// Default rectangle geometry (x, y, width, height)
    pub(crate) rect_defaults: (f64, f64, f64, f64),
    /// Default circle geometry (x, y, radius)
    pub(crate) circle_defaults: (f64, f64, f64),
    /// Default triangle geometry (x, y, circumradius)
    pub(crate) triangle_defaults: (f64, f64, f64),
    /// Fill used when a shape is added without an explicit color
    pub(crate) default_fill: Color,
    /// Whether drags are clamped to the stage bounds
    pub(crate) clamp_to_stage: bool,
    /// Maximum number of committed entities (0 = unlimited)
    pub(crate) max_entities: usize,
}

impl CanvasState {
    /// Creates a new canvas state from configuration.
    ///
    /// Stage dimensions default to the configured values and should be
    /// updated by the surface once its real size is known (see
    /// [`CanvasState::update_stage_dimensions`]).
    pub fn new(config: &Config) -> Self {
        Self {
            board: Board::new(),
            state: DrawingState::Idle,
            needs_redraw: true,
            stage_width: config.stage.width,
            stage_height: config.stage.height,
            line_color_override: None,
            stroke_width: config.stroke.width,
            solid_color: config.stroke.solid_color.to_color(),
            dashed_color: config.stroke.dashed_color.to_color(),
            dotted_color: config.stroke.dotted_color.to_color(),
            dashed_pattern: config.stroke.dashed_pattern.clone(),
            dotted_pattern: config.stroke.dotted_pattern.clone(),
            rect_defaults: (50.0, 50.0, config.shapes.rect_width, config.shapes.rect_height),
            circle_defaults: (50.0, 50.0, config.shapes.circle_radius),
            triangle_defaults: (50.0, 50.0, config.shapes.triangle_radius),
            default_fill: config.shapes.default_fill.to_color(),
            clamp_to_stage: config.stage.clamp_to_stage,
            max_entities: config.limits.max_entities,
        }
    }

    /// Updates stage dimensions after surface configuration.
    ///
    /// Called once by the surface when it learns its actual size (mount
    /// time); the stage does not track later resizes.
    pub fn update_stage_dimensions(&mut self, width: f64, height: f64) {
        self.stage_width = width;
        self.stage_height = height;
    }

    /// Returns the active tool, if any.
    pub fn active_tool(&self) -> Option<Tool> {
        match &self.state {
            DrawingState::Idle => None,
            DrawingState::ToolSelected { tool } | DrawingState::Drawing { tool, .. } => Some(*tool),
        }
    }

    /// Returns whether a stroke is currently in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Arms a stroke tool.
    ///
    /// Selecting a tool mid-draw swaps the tool but keeps the buffered
    /// points; the committed line uses whichever tool is active at
    /// pointer-up.
    pub fn select_tool(&mut self, tool: Tool) {
        match &mut self.state {
            DrawingState::Drawing { tool: active, .. } => {
                *active = tool;
                // Live stroke preview restyles immediately
                self.needs_redraw = true;
            }
            _ => {
                self.state = DrawingState::ToolSelected { tool };
            }
        }
        log::debug!("Tool selected: {:?}", tool);
    }

    /// Derives the stroke style for the active tool.
    ///
    /// Pure over the current state: width from config, round caps, dash
    /// pattern per tool, and the stroke color from the runtime line-color
    /// pick when one is set, else the per-tool default. With no tool active
    /// this falls back to the solid style (the state machine never commits a
    /// line in that case).
    pub fn stroke_style(&self) -> StrokeStyle {
        let tool = self.active_tool().unwrap_or(Tool::Solid);
        let (default_color, dash) = match tool {
            Tool::Solid => (self.solid_color, None),
            Tool::Dashed => (self.dashed_color, Some(self.dashed_pattern.clone())),
            Tool::Dotted => (self.dotted_color, Some(self.dotted_pattern.clone())),
        };
        let stroke_color = self.line_color_override.unwrap_or(default_color);

        StrokeStyle {
            stroke_color,
            stroke_width: self.stroke_width,
            dash,
            line_cap: crate::draw::LineCap::Round,
        }
    }
}
