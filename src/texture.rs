//! Image-to-texture compositing: content detection, canvas sizing and the scaled blit.

pub(crate) mod blit;
/// Opaque content bounds detection.
pub mod bounds;
/// Frame-colored texture canvas and the border layout.
pub mod compose;
