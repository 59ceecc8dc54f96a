use crate::draw::{Entity, Primitive, render_entities, render_entity};

use super::{CanvasState, DrawingState};

impl CanvasState {
    /// Returns the stroke currently being drawn, for live preview.
    ///
    /// # Returns
    /// - `Some(Entity::Line)` while a stroke with at least one point is in
    ///   progress, styled with the live tool style
    /// - `None` when idle or when the buffer is still empty
    pub fn provisional_line(&self) -> Option<Entity> {
        if let DrawingState::Drawing { points, .. } = &self.state {
            if points.is_empty() {
                return None;
            }
            Some(Entity::Line {
                points: points.clone(),
                style: self.stroke_style(),
            })
        } else {
            None
        }
    }

    /// Produces the full display list for one frame.
    ///
    /// Committed entities come first in committed-list order; the in-progress
    /// stroke, if any, is appended last so it draws on top.
    pub fn primitives(&self) -> Vec<Primitive> {
        let mut primitives = render_entities(&self.board.entities);
        if let Some(live) = self.provisional_line().as_ref().and_then(render_entity) {
            primitives.push(live);
        }
        primitives
    }
}
