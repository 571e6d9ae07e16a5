/// Physical frame dimensions and the border clamp.
pub mod dimensions;
