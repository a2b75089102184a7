//! The backing raster store: an opaque Cairo image surface.

use crate::draw::{self, BACKGROUND};
use crate::layout::CanvasSize;

/// Pixel buffer that accumulates every rendered stroke.
///
/// Backed by an `Rgb24` image surface, so every pixel is fully opaque. A new
/// store is always filled with the background color.
pub struct RasterStore {
    surface: cairo::ImageSurface,
    size: CanvasSize,
}

impl std::fmt::Debug for RasterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterStore")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl RasterStore {
    /// Allocates a store of `size` and fills it white.
    pub fn new(size: CanvasSize) -> Result<Self, cairo::Error> {
        let width = i32::try_from(size.width).map_err(|_| cairo::Error::InvalidSize)?;
        let height = i32::try_from(size.height).map_err(|_| cairo::Error::InvalidSize)?;
        let surface = cairo::ImageSurface::create(cairo::Format::Rgb24, width, height)?;
        let store = Self { surface, size };
        store.clear();
        Ok(store)
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Creates a short-lived drawing context. Returns `None` if Cairo refuses,
    /// in which case the caller's operation becomes a no-op.
    pub(crate) fn context(&self) -> Option<cairo::Context> {
        match cairo::Context::new(&self.surface) {
            Ok(ctx) => Some(ctx),
            Err(err) => {
                log::debug!("No drawing context for raster store: {err}");
                None
            }
        }
    }

    /// Replaces every pixel with the background color.
    pub fn clear(&self) {
        if let Some(ctx) = self.context() {
            draw::fill_background(&ctx, BACKGROUND);
        }
    }

    /// Reads one pixel as 8-bit RGB. Out-of-range coordinates give `None`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let stride = self.surface.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;

        let mut rgb = None;
        self.surface
            .with_data(|data| {
                rgb = data.get(offset..offset + 4).map(decode_rgb24);
            })
            .ok()?;
        rgb
    }

    /// Copies the store into a tightly packed RGB image.
    pub fn to_rgb_image(&self) -> Result<image::RgbImage, cairo::BorrowError> {
        let width = self.size.width as usize;
        let stride = self.surface.stride() as usize;
        let mut image = image::RgbImage::new(self.size.width, self.size.height);

        self.surface.with_data(|data| {
            for (y, row) in data.chunks(stride).take(self.size.height as usize).enumerate() {
                for (x, px) in row[..width * 4].chunks_exact(4).enumerate() {
                    image.put_pixel(x as u32, y as u32, image::Rgb(decode_rgb24(px)));
                }
            }
        })?;

        Ok(image)
    }

    /// Writes the store as PNG using Cairo's encoder.
    pub fn write_png(&self, out: &mut Vec<u8>) -> Result<(), cairo::IoError> {
        self.surface.write_to_png(out)
    }
}

/// Cairo's `Rgb24` stores each pixel as a native-endian `u32` of `0x00RRGGBB`.
fn decode_rgb24(px: &[u8]) -> [u8; 3] {
    let value = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
    [(value >> 16) as u8, (value >> 8) as u8, value as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_white() {
        let store = RasterStore::new(CanvasSize::new(16, 8)).unwrap();
        assert_eq!(store.size(), CanvasSize::new(16, 8));
        assert_eq!(store.pixel(0, 0), Some([255, 255, 255]));
        assert_eq!(store.pixel(15, 7), Some([255, 255, 255]));
        assert_eq!(store.pixel(16, 0), None);
    }

    #[test]
    fn rgb_image_matches_store_dimensions() {
        let store = RasterStore::new(CanvasSize::new(33, 17)).unwrap();
        let image = store.to_rgb_image().unwrap();
        assert_eq!(image.dimensions(), (33, 17));
        assert!(image.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn decode_reads_native_endian_channels() {
        let bytes = 0x0012_3456u32.to_ne_bytes();
        assert_eq!(decode_rgb24(&bytes), [0x12, 0x34, 0x56]);
    }
}
