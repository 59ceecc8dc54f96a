//! Generic input event types for cross-surface compatibility.

use crate::draw::{Color, ShapeKind};
use crate::input::tool::Tool;

/// A UI event routed from the rendering surface to the state machine.
///
/// Surface implementations map their native pointer and widget events to
/// these generic events for unified handling; every variant corresponds to
/// one pointer gesture or one discrete button click.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// A stroke-style button was clicked
    SelectTool(Tool),
    /// Primary pointer button pressed on the drawing surface
    PointerDown,
    /// Pointer moved to (x, y) while over the drawing surface
    PointerMove { x: f64, y: f64 },
    /// Primary pointer button released
    PointerUp,
    /// A shape-add button (or circle color swatch) was clicked
    AddShape {
        /// Which shape to place
        kind: ShapeKind,
        /// Fill color; `None` falls back to the configured default (white)
        fill: Option<Color>,
    },
    /// A shape drag gesture finished at (x, y)
    DragEnd { index: usize, x: f64, y: f64 },
    /// The undo button was clicked
    Undo,
    /// A line color was picked from the color dropdown
    SetLineColor(Color),
}
