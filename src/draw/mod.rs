//! Rendering primitives for the raster canvas (Cairo-based).
//!
//! - [`Color`]: RGBA color with hex parsing and predefined constants
//! - [`Stroke`]: explicit accumulator for the polyline in progress
//! - Rendering functions that paint segments and backgrounds onto Cairo targets

pub mod color;
pub mod render;
pub mod stroke;

pub use color::Color;
pub use render::{fill_background, render_segment};
pub use stroke::{Point, Stroke, StrokeStyle};

pub use color::{BACKGROUND, BLACK, BLUE, GREEN, RED, WHITE};
