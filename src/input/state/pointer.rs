use crate::draw::Entity;

use super::{CanvasState, DrawingState};

impl CanvasState {
    /// Processes a primary pointer press on the drawing surface.
    ///
    /// # Behavior
    /// - With a tool armed: starts a stroke with an empty point buffer
    /// - With no tool selected: no-op
    /// - While already drawing: no-op (duplicate press events are ignored)
    pub fn on_pointer_down(&mut self) {
        if let DrawingState::ToolSelected { tool } = self.state {
            self.state = DrawingState::Drawing {
                tool,
                points: Vec::new(),
            };
            self.needs_redraw = true;
            log::debug!("Stroke started with {:?}", tool);
        }
    }

    /// Processes pointer motion over the drawing surface.
    ///
    /// Appends (x, y) to the in-progress stroke buffer. A no-op unless a
    /// stroke is in progress: motion before pointer-down or after pointer-up
    /// leaves both the buffer and the committed list unchanged.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if let DrawingState::Drawing { points, .. } = &mut self.state {
            points.push((x, y));
            self.needs_redraw = true;
        }
    }

    /// Processes a primary pointer release.
    ///
    /// Finishes the in-progress stroke: commits one line entity built from
    /// the buffered points and the style of the tool active right now, then
    /// returns to `ToolSelected` with the same tool armed - finishing a
    /// stroke does not deselect the tool, so consecutive strokes keep the
    /// same style. A no-op when no stroke is in progress.
    pub fn on_pointer_up(&mut self) {
        if !self.is_drawing() {
            return;
        }

        // Style is derived before leaving the Drawing state so it reflects
        // the tool active at release
        let style = self.stroke_style();
        if let DrawingState::Drawing { tool, points } =
            std::mem::replace(&mut self.state, DrawingState::Idle)
        {
            log::debug!("Stroke committed with {} points", points.len());
            self.state = DrawingState::ToolSelected { tool };
            self.board.push_line(Entity::Line { points, style });
            self.needs_redraw = true;
        }
    }
}
