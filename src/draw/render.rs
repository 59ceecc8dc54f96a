//! Stateless mapping from entities to renderable primitives.
//!
//! The board core does not own a drawing surface. Instead, rendering is a pure
//! function from the committed entity list to a display list of
//! [`Primitive`]s; the embedding surface (GUI toolkit, wasm canvas, test
//! harness) walks the list in order and draws each primitive with its resolved
//! style attributes.

use super::color::{BLACK, Color};
use super::entity::Entity;
use super::style::StrokeStyle;

/// Outline width applied to every shape entity.
pub const SHAPE_OUTLINE_WIDTH: f64 = 1.0;

/// Outline color applied to every shape entity.
pub const SHAPE_OUTLINE_COLOR: Color = BLACK;

/// A resolved visual primitive ready for an embedding surface to draw.
///
/// Primitives are emitted in z-order: draw them front to back exactly as
/// returned.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Open polyline through a point sequence
    Polyline {
        /// Points in stroke order
        points: Vec<(f64, f64)>,
        /// Stroke attributes
        style: StrokeStyle,
    },
    /// Axis-aligned rectangle addressed by its top-left corner
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
    },
    /// Circle addressed by its center
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
    },
    /// Regular polygon addressed by its center
    Polygon {
        x: f64,
        y: f64,
        radius: f64,
        sides: u32,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
    },
}

/// Maps a single entity to its primitive.
///
/// Returns `None` for degenerate entities (a line with no points); malformed
/// input renders nothing rather than failing.
pub fn render_entity(entity: &Entity) -> Option<Primitive> {
    match entity {
        Entity::Line { points, style } => {
            if points.is_empty() {
                return None;
            }
            Some(Primitive::Polyline {
                points: points.clone(),
                style: style.clone(),
            })
        }
        Entity::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => Some(Primitive::Rect {
            x: *x,
            y: *y,
            width: *width,
            height: *height,
            fill: *fill,
            stroke: SHAPE_OUTLINE_COLOR,
            stroke_width: SHAPE_OUTLINE_WIDTH,
        }),
        Entity::Circle { x, y, radius, fill } => Some(Primitive::Circle {
            x: *x,
            y: *y,
            radius: *radius,
            fill: *fill,
            stroke: SHAPE_OUTLINE_COLOR,
            stroke_width: SHAPE_OUTLINE_WIDTH,
        }),
        Entity::Triangle { x, y, radius, fill } => Some(Primitive::Polygon {
            x: *x,
            y: *y,
            radius: *radius,
            sides: 3,
            fill: *fill,
            stroke: SHAPE_OUTLINE_COLOR,
            stroke_width: SHAPE_OUTLINE_WIDTH,
        }),
    }
}

/// Maps a slice of entities to primitives in committed-list order.
///
/// Degenerate entities are skipped, so the output may be shorter than the
/// input; relative order of the survivors is preserved.
pub fn render_entities(entities: &[Entity]) -> Vec<Primitive> {
    entities.iter().filter_map(render_entity).collect()
}
