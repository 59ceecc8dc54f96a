//! Freehand stroke tool selection.

/// Freehand stroke tool selection.
///
/// The active tool determines the style applied to the next committed stroke.
/// "No tool" is represented as `Option<Tool>::None` in the state machine:
/// with no tool active, pointer events do not start a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Continuous stroke, no dash pattern (default color red)
    Solid,
    /// Dashed stroke, [10, 5] on/off pattern (default color black)
    Dashed,
    /// Dotted stroke, [3, 3] on/off pattern (default color blue)
    Dotted,
}
