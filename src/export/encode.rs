//! Serializes the raster store into the requested image encoding.

use std::io::Cursor;

use super::format::ExportFormat;
use super::types::ExportError;
use crate::surface::RasterStore;

/// Encodes the store with the default settings of each encoder.
///
/// PNG goes through Cairo's writer; JPEG and WebP go through the `image`
/// crate (its WebP encoder is lossless).
pub fn encode(store: &RasterStore, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();

    match format {
        ExportFormat::Png => store.write_png(&mut bytes)?,
        ExportFormat::Jpeg | ExportFormat::Webp => {
            let image = store.to_rgb_image()?;
            image.write_to(&mut Cursor::new(&mut bytes), format.image_format())?;
        }
    }

    log::debug!(
        "Encoded {}x{} canvas as {} ({} bytes)",
        store.size().width,
        store.size().height,
        format.mime_type(),
        bytes.len()
    );

    Ok(bytes)
}
