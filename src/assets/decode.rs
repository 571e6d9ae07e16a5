use crate::assets::raster::RasterImage;
use crate::foundation::error::{FrameError, FrameResult};

/// Decode an encoded image file (PNG, JPEG, GIF, BMP, WebP) into a [`RasterImage`].
///
/// Pixels stay straight-alpha: the content scan needs the untouched alpha channel and the
/// compositor premultiplies on the fly.
pub fn decode_image(bytes: &[u8]) -> FrameResult<RasterImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| FrameError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(FrameError::decode("image has zero width or height"));
    }
    tracing::debug!(
        width = rgba.width(),
        height = rgba.height(),
        "decoded source image"
    );
    Ok(RasterImage::from_rgba_image(rgba))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
