use crate::assets::raster::RasterImage;
use crate::foundation::core::{Affine, ContentBounds, Point, Rect, Rgba8Premul};
use crate::foundation::error::{FrameError, FrameResult};
use crate::foundation::math::mul_div255_u8;

/// Mapping from source-image pixel space into destination canvas space.
///
/// X and Y scale independently, so the source region may be stretched non-uniformly.
pub(crate) fn src_to_dst_affine(src: ContentBounds, dst: Rect) -> Affine {
    let src = src.to_rect();
    let sx = dst.width() / src.width();
    let sy = dst.height() / src.height();
    Affine::translate((dst.x0, dst.y0))
        * Affine::scale_non_uniform(sx, sy)
        * Affine::translate((-src.x0, -src.y0))
}

/// Scale-copy `src_rect` of `src` into `dst_rect` of an RGBA8 canvas, compositing source-over.
///
/// A destination pixel is written when its centre lies inside `dst_rect` (half-open). Sampling is
/// bilinear in premultiplied space and clamped to `src_rect`, so pixels outside the cropped region
/// never bleed in.
pub(crate) fn blit_scaled_over(
    dst: &mut [u8],
    dst_width: u32,
    dst_height: u32,
    src: &RasterImage,
    src_rect: ContentBounds,
    dst_rect: Rect,
) -> FrameResult<()> {
    let expected_len = (dst_width as usize)
        .checked_mul(dst_height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| FrameError::validation("blit buffer size overflow"))?;
    if dst.len() != expected_len {
        return Err(FrameError::validation(
            "blit_scaled_over expects a buffer matching width*height*4",
        ));
    }
    if src_rect.is_empty()
        || src_rect.right() > src.width()
        || src_rect.bottom() > src.height()
    {
        return Err(FrameError::validation(
            "blit source rectangle must be non-empty and inside the image",
        ));
    }
    if dst_rect.width() <= 0.0 || dst_rect.height() <= 0.0 {
        return Ok(());
    }

    let inv = src_to_dst_affine(src_rect, dst_rect).inverse();
    let sampler = Sampler {
        src,
        rect: src_rect,
    };

    let x_start = dst_rect.x0.floor().max(0.0) as u32;
    let y_start = dst_rect.y0.floor().max(0.0) as u32;
    let x_end = (dst_rect.x1.ceil().max(0.0) as u32).min(dst_width);
    let y_end = (dst_rect.y1.ceil().max(0.0) as u32).min(dst_height);

    for y in y_start..y_end {
        let cy = f64::from(y) + 0.5;
        if cy < dst_rect.y0 || cy >= dst_rect.y1 {
            continue;
        }
        for x in x_start..x_end {
            let cx = f64::from(x) + 0.5;
            if cx < dst_rect.x0 || cx >= dst_rect.x1 {
                continue;
            }
            let s = inv * Point::new(cx, cy);
            let px = sampler.bilinear(s.x, s.y);

            let idx = ((y as usize) * (dst_width as usize) + (x as usize)) * 4;
            let d = &mut dst[idx..idx + 4];
            let out = premul_over_px([d[0], d[1], d[2], d[3]], px);
            d.copy_from_slice(&out);
        }
    }
    Ok(())
}

struct Sampler<'a> {
    src: &'a RasterImage,
    rect: ContentBounds,
}

impl Sampler<'_> {
    fn premul_at(&self, x: u32, y: u32) -> [f32; 4] {
        let [r, g, b, a] = self.src.pixel(x, y);
        let p = Rgba8Premul::from_straight_rgba(r, g, b, a);
        [
            f32::from(p.r),
            f32::from(p.g),
            f32::from(p.b),
            f32::from(p.a),
        ]
    }

    /// Sample at continuous source coordinates (pixel centres sit at `i + 0.5`).
    fn bilinear(&self, sx: f64, sy: f64) -> [u8; 4] {
        let min_x = f64::from(self.rect.x);
        let min_y = f64::from(self.rect.y);
        let max_x = f64::from(self.rect.right() - 1);
        let max_y = f64::from(self.rect.bottom() - 1);

        let fx = (sx - 0.5).clamp(min_x, max_x);
        let fy = (sy - 0.5).clamp(min_y, max_y);
        let x0 = fx.floor() as u32;
        let y0 = fy.floor() as u32;
        let x1 = (x0 + 1).min(self.rect.right() - 1);
        let y1 = (y0 + 1).min(self.rect.bottom() - 1);
        let tx = (fx - f64::from(x0)) as f32;
        let ty = (fy - f64::from(y0)) as f32;

        let p00 = self.premul_at(x0, y0);
        let p10 = self.premul_at(x1, y0);
        let p01 = self.premul_at(x0, y1);
        let p11 = self.premul_at(x1, y1);

        let mut out = [0u8; 4];
        for c in 0..4 {
            let top = p00[c] + (p10[c] - p00[c]) * tx;
            let bottom = p01[c] + (p11[c] - p01[c]) * tx;
            let v = top + (bottom - top) * ty;
            out[c] = v.round().clamp(0.0, 255.0) as u8;
        }
        // Keep colour channels within alpha after rounding.
        out[0] = out[0].min(out[3]);
        out[1] = out[1].min(out[3]);
        out[2] = out[2].min(out[3]);
        out
    }
}

fn premul_over_px(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    if src[3] == 255 {
        return src;
    }
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/texture/blit.rs"]
mod tests;
