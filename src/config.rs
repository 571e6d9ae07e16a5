use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assets::color::FrameColor;
use crate::export::sink::DEFAULT_EXPORT_FILE_NAME;
use crate::foundation::error::{FrameError, FrameResult};
use crate::model::dimensions::DimensionModel;

/// Border settings as written in a config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BorderConfig {
    /// Draw the border band.
    pub enabled: bool,
    /// Border thickness in centimetres (clamped to half the shorter side).
    pub cm: f64,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            cm: 2.0,
        }
    }
}

/// JSON-facing frame settings. Every field is optional.
///
/// ```json
/// { "width_cm": 30, "height_cm": 20, "depth_cm": 2,
///   "border": { "enabled": true, "cm": 2 }, "frame_color": "#ffffff" }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameConfig {
    /// Frame width in centimetres.
    pub width_cm: f64,
    /// Frame height in centimetres.
    pub height_cm: f64,
    /// Frame depth in centimetres.
    pub depth_cm: f64,
    /// Border band.
    pub border: BorderConfig,
    /// Border fill and solid-face color.
    pub frame_color: FrameColor,
    /// Output file name for exports.
    pub output: String,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            width_cm: 30.0,
            height_cm: 20.0,
            depth_cm: 2.0,
            border: BorderConfig::default(),
            frame_color: FrameColor::WHITE,
            output: DEFAULT_EXPORT_FILE_NAME.to_owned(),
        }
    }
}

impl FrameConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FrameResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FrameError::validation(format!("parse frame config JSON: {e}")))
    }

    /// Parse a config from a JSON string.
    pub fn from_json_str(s: &str) -> FrameResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| FrameError::validation(format!("parse frame config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FrameResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FrameError::validation(format!("open frame config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Build a validated [`DimensionModel`]. The border goes through the clamping setter.
    pub fn dimensions(&self) -> FrameResult<DimensionModel> {
        let mut dims = DimensionModel::new(self.width_cm, self.height_cm, self.depth_cm);
        dims.validate()?;
        if !self.border.cm.is_finite() {
            return Err(FrameError::validation(format!(
                "border.cm must be finite (got {})",
                self.border.cm
            )));
        }
        dims.set_border_enabled(self.border.enabled);
        dims.set_border_cm(self.border.cm);
        Ok(dims)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
