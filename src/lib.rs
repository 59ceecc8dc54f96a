//! Interactive drawing board core.
//!
//! inkboard is the logic core of a drawing canvas: freehand strokes in
//! three styles, draggable geometric shapes, snapshot-based undo, and a
//! stateless display-list renderer. An embedding surface feeds
//! [`input::CanvasEvent`]s in and draws the [`draw::Primitive`]s that
//! [`input::CanvasState::primitives`] returns.

pub mod config;
pub mod draw;
pub mod input;
pub mod util;

pub use config::Config;
pub use input::{CanvasEvent, CanvasState};
