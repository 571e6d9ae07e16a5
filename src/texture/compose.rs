use std::io::Cursor;

use crate::assets::color::FrameColor;
use crate::assets::raster::RasterImage;
use crate::foundation::core::{Canvas, ContentBounds, Rect};
use crate::foundation::error::{FrameError, FrameResult};
use crate::texture::blit::blit_scaled_over;

/// Longest texture edge in pixels.
pub const MAX_TEXTURE_SIZE: u32 = 2048;

/// Color space tag carried by a composited texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSpace {
    /// Non-linear sRGB (what image files and color pickers use).
    Srgb,
}

/// Finished face texture: an opaque RGBA8 canvas.
#[derive(Clone, Debug)]
pub struct TextureBuffer {
    /// Pixel dimensions.
    pub canvas: Canvas,
    /// Row-major RGBA8. Every pixel is opaque after flattening against the frame color.
    pub data: Vec<u8>,
    /// Color space of `data`.
    pub color_space: ColorSpace,
}

impl TextureBuffer {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    /// RGBA of pixel `(x, y)`. Callers keep coordinates in range; out-of-range reads panic.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y as usize) * (self.canvas.width as usize) + (x as usize)) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Encode the texture as PNG.
    pub fn to_png_bytes(&self) -> FrameResult<Vec<u8>> {
        let mut out = Vec::new();
        image::write_buffer_with_format(
            &mut Cursor::new(&mut out),
            &self.data,
            self.canvas.width,
            self.canvas.height,
            image::ExtendedColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| FrameError::export(format!("encode texture png: {e}")))?;
        Ok(out)
    }
}

/// Border thickness in destination pixels, per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderInsets {
    /// Horizontal inset (left and right).
    pub x: f64,
    /// Vertical inset (top and bottom).
    pub y: f64,
}

fn check_frame_dims(frame_width_cm: f64, frame_height_cm: f64) -> FrameResult<()> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if !ok(frame_width_cm) || !ok(frame_height_cm) {
        return Err(FrameError::validation(format!(
            "frame dimensions must be finite and > 0 (got {frame_width_cm} x {frame_height_cm} cm)"
        )));
    }
    Ok(())
}

/// Canvas resolution for a frame of the given physical aspect ratio.
///
/// The longer axis is pinned to [`MAX_TEXTURE_SIZE`]; the shorter one scales proportionally and
/// both are rounded to the nearest pixel.
pub fn texture_canvas_for(frame_width_cm: f64, frame_height_cm: f64) -> FrameResult<Canvas> {
    check_frame_dims(frame_width_cm, frame_height_cm)?;

    let max = f64::from(MAX_TEXTURE_SIZE);
    let ratio = frame_width_cm / frame_height_cm;
    let (w, h) = if ratio >= 1.0 {
        (max, max / ratio)
    } else {
        (max * ratio, max)
    };

    Ok(Canvas {
        width: (w.round() as u32).max(1),
        height: (h.round() as u32).max(1),
    })
}

/// Convert a border in centimetres into per-axis pixel insets on `canvas`.
pub fn border_insets(
    canvas: Canvas,
    frame_width_cm: f64,
    frame_height_cm: f64,
    border_cm: f64,
) -> BorderInsets {
    BorderInsets {
        x: (border_cm / frame_width_cm) * f64::from(canvas.width),
        y: (border_cm / frame_height_cm) * f64::from(canvas.height),
    }
}

/// Destination rectangle reserved for image content, inset by `insets` on every side.
///
/// The result may have zero or negative size when the border swallows the canvas.
pub fn inner_rect(canvas: Canvas, insets: BorderInsets) -> Rect {
    Rect::new(
        insets.x,
        insets.y,
        f64::from(canvas.width) - insets.x,
        f64::from(canvas.height) - insets.y,
    )
}

/// Composite `bounds` of `image` onto a frame-colored canvas.
///
/// The canvas is always filled with `frame_color` first, which draws the border and flattens any
/// transparency left in the content. When either the inner rectangle or `bounds` is empty the flat
/// fill is the result.
#[tracing::instrument(skip(image, frame_color), fields(src_w = image.width(), src_h = image.height()))]
pub fn compose_texture(
    image: &RasterImage,
    bounds: ContentBounds,
    frame_width_cm: f64,
    frame_height_cm: f64,
    border_cm: f64,
    frame_color: FrameColor,
) -> FrameResult<TextureBuffer> {
    if !border_cm.is_finite() || border_cm < 0.0 {
        return Err(FrameError::validation(format!(
            "border must be finite and >= 0 (got {border_cm} cm)"
        )));
    }
    let canvas = texture_canvas_for(frame_width_cm, frame_height_cm)?;

    let mut data = frame_color.to_rgba8().repeat(canvas.rgba_len()? / 4);

    let insets = border_insets(canvas, frame_width_cm, frame_height_cm, border_cm);
    let inner = inner_rect(canvas, insets);

    if inner.width() > 0.0 && inner.height() > 0.0 && !bounds.is_empty() {
        blit_scaled_over(
            &mut data,
            canvas.width,
            canvas.height,
            image,
            bounds,
            inner,
        )?;
    } else {
        tracing::debug!(
            inner_w = inner.width(),
            inner_h = inner.height(),
            "nothing to draw, texture is the flat frame color"
        );
    }

    Ok(TextureBuffer {
        canvas,
        data,
        color_space: ColorSpace::Srgb,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/texture/compose.rs"]
mod tests;
