use crate::foundation::error::{FrameError, FrameResult};
use crate::foundation::math::floor_to_tenth;

/// Physical frame size in metres, as consumed by the scene builder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeterDims {
    /// Width (x extent).
    pub width: f64,
    /// Height (y extent).
    pub height: f64,
    /// Depth (z extent).
    pub depth: f64,
}

/// Physical frame dimensions in centimetres plus the optional border.
///
/// Invariant: while the border is enabled, `border_cm` never exceeds [`Self::max_border_cm`].
/// Width and height changes re-enforce it by clamping the border downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionModel {
    width_cm: f64,
    height_cm: f64,
    depth_cm: f64,
    border_enabled: bool,
    border_cm: f64,
}

impl DimensionModel {
    /// Build a model with the border disabled.
    ///
    /// Values are taken as-is; call [`Self::validate`] before compositing.
    pub fn new(width_cm: f64, height_cm: f64, depth_cm: f64) -> Self {
        Self {
            width_cm,
            height_cm,
            depth_cm,
            border_enabled: false,
            border_cm: 0.0,
        }
    }

    /// Frame width in centimetres.
    pub fn width_cm(&self) -> f64 {
        self.width_cm
    }

    /// Frame height in centimetres.
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Frame depth in centimetres.
    pub fn depth_cm(&self) -> f64 {
        self.depth_cm
    }

    /// Whether the border band is drawn.
    pub fn border_enabled(&self) -> bool {
        self.border_enabled
    }

    /// Stored border thickness, kept even while the border is disabled.
    pub fn border_cm(&self) -> f64 {
        self.border_cm
    }

    /// Border thickness the compositor should use: `0` while disabled.
    pub fn effective_border_cm(&self) -> f64 {
        if self.border_enabled {
            self.border_cm
        } else {
            0.0
        }
    }

    /// Largest allowed border: half the shorter side, floored to one decimal place.
    pub fn max_border_cm(&self) -> f64 {
        floor_to_tenth(self.width_cm.min(self.height_cm) / 2.0)
    }

    /// Set the width and re-clamp the border.
    pub fn set_width_cm(&mut self, width_cm: f64) {
        self.width_cm = width_cm;
        self.clamp_border();
    }

    /// Set the height and re-clamp the border.
    pub fn set_height_cm(&mut self, height_cm: f64) {
        self.height_cm = height_cm;
        self.clamp_border();
    }

    /// Set the depth. Depth has no effect on the texture.
    pub fn set_depth_cm(&mut self, depth_cm: f64) {
        self.depth_cm = depth_cm;
    }

    /// Toggle the border band.
    pub fn set_border_enabled(&mut self, enabled: bool) {
        self.border_enabled = enabled;
    }

    /// Set the border thickness, limited to `[0, max_border_cm()]`.
    pub fn set_border_cm(&mut self, border_cm: f64) {
        self.border_cm = border_cm.max(0.0);
        self.clamp_border();
    }

    fn clamp_border(&mut self) {
        let max = self.max_border_cm();
        if self.border_cm > max {
            tracing::debug!(
                from = self.border_cm,
                to = max,
                "border exceeds half the shorter side, clamping"
            );
            self.border_cm = max.max(0.0);
        }
    }

    /// Dimensions converted to metres.
    pub fn to_meters(&self) -> MeterDims {
        MeterDims {
            width: self.width_cm / 100.0,
            height: self.height_cm / 100.0,
            depth: self.depth_cm / 100.0,
        }
    }

    /// Reject non-positive or non-finite sizes before they reach the compositor or exporter.
    pub fn validate(&self) -> FrameResult<()> {
        for (name, v) in [
            ("width_cm", self.width_cm),
            ("height_cm", self.height_cm),
            ("depth_cm", self.depth_cm),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(FrameError::validation(format!(
                    "{name} must be finite and > 0 (got {v})"
                )));
            }
        }
        if !self.border_cm.is_finite() {
            return Err(FrameError::validation("border_cm must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/dimensions.rs"]
mod tests;
