//! Stroke styling for freehand lines.

use super::color::Color;

/// Line cap applied to stroke endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Rounded endpoints (default for all tools)
    #[default]
    Round,
    /// Flat endpoints, no extension past the point
    Butt,
    /// Flat endpoints extended by half the stroke width
    Square,
}

/// Complete style record attached to a committed freehand line.
///
/// Derived from the active tool at pointer-release time and then immutable;
/// restyling the tool afterwards never retroactively changes committed lines.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color
    pub stroke_color: Color,
    /// Stroke width in pixels
    pub stroke_width: f64,
    /// Dash pattern as alternating on/off lengths; `None` draws a solid stroke
    pub dash: Option<Vec<f64>>,
    /// Endpoint cap
    pub line_cap: LineCap,
}

impl StrokeStyle {
    /// Creates a solid stroke with the given color and width.
    pub fn solid(stroke_color: Color, stroke_width: f64) -> Self {
        Self {
            stroke_color,
            stroke_width,
            dash: None,
            line_cap: LineCap::Round,
        }
    }

    /// Creates a dashed stroke with the given color, width, and dash pattern.
    pub fn dashed(stroke_color: Color, stroke_width: f64, dash: Vec<f64>) -> Self {
        Self {
            stroke_color,
            stroke_width,
            dash: Some(dash),
            line_cap: LineCap::Round,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    #[test]
    fn solid_stroke_has_no_dash() {
        let style = StrokeStyle::solid(RED, 2.0);
        assert!(style.dash.is_none());
        assert_eq!(style.line_cap, LineCap::Round);
    }

    #[test]
    fn dashed_stroke_keeps_pattern() {
        let style = StrokeStyle::dashed(RED, 2.0, vec![10.0, 5.0]);
        assert_eq!(style.dash.as_deref(), Some(&[10.0, 5.0][..]));
    }
}
