//! Opaque content detection.
//!
//! Four edge scans walk inward from the top, bottom, left and right of the image and stop at the
//! first row/column holding a pixel with non-zero alpha. Images with wide transparent margins and
//! an opaque centre therefore touch only a small part of the pixel data.

use crate::assets::raster::RasterImage;
use crate::foundation::core::ContentBounds;

/// Find the tight bounding box of all pixels with alpha > 0.
///
/// A fully transparent image yields the full image rectangle ("nothing to crop").
#[tracing::instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn detect_content_bounds(image: &RasterImage) -> ContentBounds {
    let (w, h) = (image.width(), image.height());
    let full = ContentBounds::full(w, h);

    if w == 0 || h == 0 {
        return full;
    }

    let row_has_content = |y: u32| (0..w).any(|x| image.alpha(x, y) > 0);
    let col_has_content = |x: u32, y0: u32, y1: u32| (y0..=y1).any(|y| image.alpha(x, y) > 0);

    let Some(min_y) = (0..h).find(|&y| row_has_content(y)) else {
        tracing::debug!("image is fully transparent, keeping full bounds");
        return full;
    };
    // A content row exists, so each remaining scan is guaranteed a hit.
    let max_y = (min_y..h)
        .rev()
        .find(|&y| row_has_content(y))
        .unwrap_or(min_y);
    let min_x = (0..w)
        .find(|&x| col_has_content(x, min_y, max_y))
        .unwrap_or(0);
    let max_x = (min_x..w)
        .rev()
        .find(|&x| col_has_content(x, min_y, max_y))
        .unwrap_or(w - 1);

    ContentBounds {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/bounds.rs"]
mod tests;
