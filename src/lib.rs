//! Freehand drawing canvas with pen and eraser tools and raster export.
//!
//! The [`layout`] controller owns tool configuration and responsive sizing,
//! the [`surface`] owns the raster store and the pointer state machine, and
//! [`app::App`] wires the two together. [`replay`] drives an app from a
//! scripted session so the whole pipeline runs without a window system.

pub mod app;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod layout;
pub mod replay;
pub mod surface;
pub mod util;

pub use app::App;
pub use config::Config;
