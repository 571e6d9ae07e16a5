//! Framed-photo scene: box geometry plus per-face materials.

/// Box mesh construction.
pub mod geometry;
/// Face materials and the scene descriptor.
pub mod model;
