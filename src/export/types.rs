//! Error type for encoding and saving exports.

use thiserror::Error;

/// Errors that can occur while exporting the canvas.
///
/// A missing raster store is not an error; export reports it as "nothing
/// exported" instead.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to allocate raster store: {0}")]
    Allocation(#[from] cairo::Error),

    #[error("Raster store is not readable: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to save export: {0}")]
    Save(#[from] std::io::Error),

    #[error("Unsupported export format '{0}' (expected png, jpeg or webp)")]
    UnknownFormat(String),
}
