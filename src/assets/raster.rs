use std::sync::Arc;

use crate::foundation::error::{FrameError, FrameResult};

/// Decoded source image in straight-alpha RGBA8.
///
/// Immutable once built. Clones share the pixel buffer, so replacing the session image only drops
/// a reference.
#[derive(Clone, Debug)]
pub struct RasterImage {
    pixels: Arc<image::RgbaImage>,
}

impl RasterImage {
    /// Wrap an already decoded RGBA8 image.
    pub fn from_rgba_image(rgba: image::RgbaImage) -> Self {
        Self {
            pixels: Arc::new(rgba),
        }
    }

    /// Build from tightly packed, row-major straight RGBA8 bytes.
    pub fn from_raw(width: u32, height: u32, rgba8: Vec<u8>) -> FrameResult<Self> {
        let rgba = image::RgbaImage::from_raw(width, height, rgba8).ok_or_else(|| {
            FrameError::validation(format!(
                "raster byte length does not match {width}x{height} rgba8"
            ))
        })?;
        Ok(Self::from_rgba_image(rgba))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Straight RGBA of pixel `(x, y)`. Callers keep coordinates in range.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels.get_pixel(x, y).0
    }

    /// Alpha of pixel `(x, y)`.
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.pixels.get_pixel(x, y).0[3]
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Borrow the underlying `image` buffer.
    pub fn as_rgba_image(&self) -> &image::RgbaImage {
        &self.pixels
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/raster.rs"]
mod tests;
