/// Frame color parsing and conversion.
pub mod color;
/// Image file decoding.
pub mod decode;
/// Decoded RGBA8 raster storage.
pub mod raster;
