//! Geometry helpers shared by the input state machine.

// ============================================================================
// Drag Boundary Clamp
// ============================================================================

/// Constrains a dragged shape's position so its bounding box stays inside the
/// stage.
///
/// Each axis is clamped independently to `[size/2, stage - size/2]`, treating
/// the position as the shape's center; no rotation or aspect handling. When a
/// shape is larger than the stage on an axis, the lower bound wins and the
/// shape pins to `size/2`.
///
/// # Arguments
/// * `pos` - Proposed (x, y) position from the drag
/// * `size` - Shape bounding (width, height)
/// * `stage` - Stage (width, height)
///
/// # Returns
/// The clamped (x, y) position.
pub fn clamp_drag_position(pos: (f64, f64), size: (f64, f64), stage: (f64, f64)) -> (f64, f64) {
    let min_x = size.0 / 2.0;
    let max_x = (stage.0 - size.0 / 2.0).max(min_x);
    let min_y = size.1 / 2.0;
    let max_y = (stage.1 - size.1 / 2.0).max(min_y);

    (pos.0.clamp(min_x, max_x), pos.1.clamp(min_y, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_inside_bounds_are_untouched() {
        assert_eq!(
            clamp_drag_position((300.0, 200.0), (50.0, 50.0), (800.0, 600.0)),
            (300.0, 200.0)
        );
    }

    #[test]
    fn far_negative_drag_pins_to_top_left_bound() {
        assert_eq!(
            clamp_drag_position((-1000.0, -1000.0), (50.0, 50.0), (800.0, 600.0)),
            (25.0, 25.0)
        );
    }

    #[test]
    fn far_positive_drag_pins_to_bottom_right_bound() {
        assert_eq!(
            clamp_drag_position((5000.0, 5000.0), (50.0, 80.0), (800.0, 600.0)),
            (775.0, 560.0)
        );
    }

    #[test]
    fn axes_clamp_independently() {
        assert_eq!(
            clamp_drag_position((-1000.0, 200.0), (50.0, 50.0), (800.0, 600.0)),
            (25.0, 200.0)
        );
    }

    #[test]
    fn oversized_shapes_pin_to_lower_bound() {
        let (x, y) = clamp_drag_position((10.0, 10.0), (1000.0, 1000.0), (800.0, 600.0));
        assert_eq!((x, y), (500.0, 500.0));
    }
}
