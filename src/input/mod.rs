//! Input handling and interaction state machine.
//!
//! This module translates surface pointer and button events into drawing
//! actions. It maintains the armed tool, the in-progress stroke buffer, and
//! the state machine across the idle / tool-selected / drawing states.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::CanvasEvent;
pub use state::{CanvasState, DrawingState};
pub use tool::Tool;
