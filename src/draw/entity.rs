//! Drawable entity definitions for the board.

use super::color::Color;
use super::style::StrokeStyle;

/// The kind of geometric shape placed by the shape-add buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Axis-aligned rectangle
    Rectangle,
    /// Circle with a selectable fill color
    Circle,
    /// Regular triangle (3-sided polygon)
    Triangle,
}

/// A drawable entity held in the committed list.
///
/// Each variant carries everything needed to render it independently.
/// Insertion order into the committed list is z-order: later entities render
/// on top of earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    /// Committed freehand stroke - polyline connecting pointer drag points
    Line {
        /// Sequence of (x, y) coordinates traced by the pointer
        points: Vec<(f64, f64)>,
        /// Style captured from the active tool at pointer release
        style: StrokeStyle,
    },
    /// Draggable rectangle, addressed by its top-left corner
    Rect {
        /// Top-left X coordinate
        x: f64,
        /// Top-left Y coordinate
        y: f64,
        /// Width in pixels
        width: f64,
        /// Height in pixels
        height: f64,
        /// Fill color
        fill: Color,
    },
    /// Draggable circle, addressed by its center
    Circle {
        /// Center X coordinate
        x: f64,
        /// Center Y coordinate
        y: f64,
        /// Radius in pixels
        radius: f64,
        /// Fill color (chosen from the swatch palette, defaults to white)
        fill: Color,
    },
    /// Draggable regular triangle, addressed by its center
    Triangle {
        /// Center X coordinate
        x: f64,
        /// Center Y coordinate
        y: f64,
        /// Circumradius in pixels
        radius: f64,
        /// Fill color
        fill: Color,
    },
}

impl Entity {
    /// Returns whether this entity is a draggable shape (anything but a line).
    pub fn is_shape(&self) -> bool {
        !matches!(self, Entity::Line { .. })
    }

    /// Returns the bounding width and height of a shape entity.
    ///
    /// Used by the drag boundary clamp. Lines are not draggable and have no
    /// meaningful drag size, so they return `None`.
    pub fn size(&self) -> Option<(f64, f64)> {
        match self {
            Entity::Line { .. } => None,
            Entity::Rect { width, height, .. } => Some((*width, *height)),
            Entity::Circle { radius, .. } | Entity::Triangle { radius, .. } => {
                Some((radius * 2.0, radius * 2.0))
            }
        }
    }

    /// Moves a shape entity to a new position. No-op for lines.
    pub fn set_position(&mut self, new_x: f64, new_y: f64) {
        match self {
            Entity::Line { .. } => {}
            Entity::Rect { x, y, .. }
            | Entity::Circle { x, y, .. }
            | Entity::Triangle { x, y, .. } => {
                *x = new_x;
                *y = new_y;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::WHITE;
    use crate::draw::style::StrokeStyle;

    #[test]
    fn shape_sizes_cover_bounding_box() {
        let rect = Entity::Rect {
            x: 50.0,
            y: 50.0,
            width: 50.0,
            height: 50.0,
            fill: WHITE,
        };
        assert_eq!(rect.size(), Some((50.0, 50.0)));

        let circle = Entity::Circle {
            x: 50.0,
            y: 50.0,
            radius: 25.0,
            fill: WHITE,
        };
        assert_eq!(circle.size(), Some((50.0, 50.0)));

        let triangle = Entity::Triangle {
            x: 50.0,
            y: 50.0,
            radius: 40.0,
            fill: WHITE,
        };
        assert_eq!(triangle.size(), Some((80.0, 80.0)));
    }

    #[test]
    fn lines_are_not_draggable() {
        let mut line = Entity::Line {
            points: vec![(1.0, 2.0)],
            style: StrokeStyle::solid(WHITE, 2.0),
        };
        assert!(!line.is_shape());
        assert_eq!(line.size(), None);

        line.set_position(100.0, 100.0);
        assert_eq!(
            line,
            Entity::Line {
                points: vec![(1.0, 2.0)],
                style: StrokeStyle::solid(WHITE, 2.0),
            }
        );
    }

    #[test]
    fn set_position_moves_shapes() {
        let mut circle = Entity::Circle {
            x: 50.0,
            y: 50.0,
            radius: 25.0,
            fill: WHITE,
        };
        circle.set_position(120.0, 80.0);
        assert_eq!(
            circle,
            Entity::Circle {
                x: 120.0,
                y: 80.0,
                radius: 25.0,
                fill: WHITE,
            }
        );
    }
}
