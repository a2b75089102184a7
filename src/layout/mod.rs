//! Layout controller: tool configuration, responsive canvas sizing, and the
//! clear/export commands issued against the drawing surface.

pub mod controller;
pub mod menu;
pub mod sizing;

pub use controller::{LayoutController, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
pub use menu::{MenuPresentation, MenuState};
pub use sizing::{CanvasSize, Viewport, fit_canvas};
