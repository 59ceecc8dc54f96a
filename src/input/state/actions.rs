use crate::draw::{Color, Entity, ShapeKind};
use crate::input::events::CanvasEvent;
use crate::util;
use log::warn;

use super::{CanvasState, DrawingState};

impl CanvasState {
    /// Dispatches a surface event to the matching state-machine operation.
    pub fn handle_event(&mut self, event: CanvasEvent) {
        match event {
            CanvasEvent::SelectTool(tool) => self.select_tool(tool),
            CanvasEvent::PointerDown => self.on_pointer_down(),
            CanvasEvent::PointerMove { x, y } => self.on_pointer_move(x, y),
            CanvasEvent::PointerUp => self.on_pointer_up(),
            CanvasEvent::AddShape { kind, fill } => self.add_shape(kind, fill),
            CanvasEvent::DragEnd { index, x, y } => self.drag_end(index, x, y),
            CanvasEvent::Undo => self.undo(),
            CanvasEvent::SetLineColor(color) => self.set_line_color(color),
        }
    }

    /// Places a new shape at its fixed default geometry and clears the
    /// active tool.
    ///
    /// `fill` falls back to the configured default (white). The pre-mutation
    /// entity list is snapshotted for undo. When the entity cap is reached
    /// the shape is discarded with a warning and nothing is snapshotted.
    pub fn add_shape(&mut self, kind: ShapeKind, fill: Option<Color>) {
        let fill = fill.unwrap_or(self.default_fill);
        let shape = match kind {
            ShapeKind::Rectangle => {
                let (x, y, width, height) = self.rect_defaults;
                Entity::Rect {
                    x,
                    y,
                    width,
                    height,
                    fill,
                }
            }
            ShapeKind::Circle => {
                let (x, y, radius) = self.circle_defaults;
                Entity::Circle { x, y, radius, fill }
            }
            ShapeKind::Triangle => {
                let (x, y, radius) = self.triangle_defaults;
                Entity::Triangle { x, y, radius, fill }
            }
        };

        if self.board.try_add_shape(shape, self.max_entities) {
            log::debug!("Added {:?}", kind);
        } else {
            warn!(
                "Entity limit ({}) reached; discarding new {:?}",
                self.max_entities, kind
            );
        }

        // Placing a shape always disarms the stroke tool
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
    }

    /// Finishes a shape drag: moves the shape at `index` to (x, y), clamped
    /// to the stage bounds when clamping is enabled, and clears the active
    /// tool.
    ///
    /// The pre-mutation entity list is snapshotted for undo. A drag targeting
    /// an out-of-range index or a line entity is rejected with a warning and
    /// mutates nothing.
    pub fn drag_end(&mut self, index: usize, x: f64, y: f64) {
        let Some(size) = self.board.entities.get(index).and_then(Entity::size) else {
            warn!("Ignoring drag end for non-shape entity index {index}");
            return;
        };

        let (x, y) = if self.clamp_to_stage {
            util::clamp_drag_position((x, y), size, (self.stage_width, self.stage_height))
        } else {
            (x, y)
        };

        self.board.apply_drag(index, x, y);
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
    }

    /// Reverts the most recent shape add or drag by restoring the latest
    /// undo snapshot. Safe no-op when the history is empty.
    pub fn undo(&mut self) {
        if self.board.undo() {
            self.needs_redraw = true;
        } else {
            log::debug!("Undo with empty history; nothing to do");
        }
    }

    /// Picks a line color that overrides the per-tool stroke defaults.
    ///
    /// Applies to strokes committed from now on; already-committed lines
    /// keep the style they were drawn with.
    pub fn set_line_color(&mut self, color: Color) {
        self.line_color_override = Some(color);
        if self.is_drawing() {
            // Live stroke preview restyles immediately
            self.needs_redraw = true;
        }
    }
}
