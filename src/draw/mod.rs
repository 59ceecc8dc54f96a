//! Entity model, board state, and display-list rendering.
//!
//! This module defines the core drawing types for the board:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`StrokeStyle`]: stroke attributes captured when a line is committed
//! - [`Entity`]: the tagged union of drawable things (lines and shapes)
//! - [`Board`]: the committed entity list plus the undo history
//! - [`render`]: the stateless entity-to-primitive mapping

pub mod board;
pub mod color;
pub mod entity;
pub mod render;
pub mod style;

// Re-export commonly used types at module level
pub use board::Board;
pub use color::{Color, UnknownColor};
pub use entity::{Entity, ShapeKind};
pub use render::{Primitive, render_entities, render_entity};
pub use style::{LineCap, StrokeStyle};

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
