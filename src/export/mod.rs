//! Export of the raster store to PNG, JPEG and WebP files.
//!
//! Encoding is delegated to Cairo (PNG) and the `image` crate (JPEG, WebP)
//! with their default settings. Files are always named `canvas.<ext>`.

pub mod encode;
pub mod file;
pub mod format;
pub mod types;

pub use encode::encode;
pub use file::{expand_tilde, save_export};
pub use format::ExportFormat;
pub use types::ExportError;
