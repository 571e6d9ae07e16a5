use crate::assets::color::FrameColor;
use crate::assets::decode::decode_image;
use crate::assets::raster::RasterImage;
use crate::export::glb::{ExportOptions, SceneExporter};
use crate::export::sink::{ByteSink, DEFAULT_EXPORT_FILE_NAME};
use crate::foundation::core::ContentBounds;
use crate::foundation::error::{FrameError, FrameResult};
use crate::model::dimensions::DimensionModel;
use crate::scene::model::{NO_IMAGE_NOTICE, build_scene};
use crate::texture::bounds::detect_content_bounds;
use crate::texture::compose::{TextureBuffer, compose_texture};

/// Handle for one started upload. Only the most recently issued ticket is honored on completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UploadTicket(u64);

impl UploadTicket {
    /// Monotonic sequence number of this upload.
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// Result of completing an upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The image was adopted and the texture recomposited.
    Applied,
    /// A newer upload was started after this one; the decoded image was dropped.
    Stale,
}

/// Explicit editing context: current image, its content bounds, the dimension model, the frame
/// color and the single live texture.
///
/// Every parameter change recomposites synchronously while an image is loaded. The texture slot is
/// single-owner: the previous buffer is released before the new one is stored.
#[derive(Debug)]
pub struct FrameSession {
    dims: DimensionModel,
    frame_color: FrameColor,
    image: Option<RasterImage>,
    bounds: ContentBounds,
    texture: Option<TextureBuffer>,
    texture_generation: u64,
    next_ticket: u64,
    latest_ticket: Option<UploadTicket>,
}

impl FrameSession {
    /// Start a session with no image loaded.
    pub fn new(dims: DimensionModel, frame_color: FrameColor) -> Self {
        Self {
            dims,
            frame_color,
            image: None,
            bounds: ContentBounds::default(),
            texture: None,
            texture_generation: 0,
            next_ticket: 0,
            latest_ticket: None,
        }
    }

    /// Current dimension model.
    pub fn dimensions(&self) -> &DimensionModel {
        &self.dims
    }

    /// Current frame color.
    pub fn frame_color(&self) -> FrameColor {
        self.frame_color
    }

    /// Loaded image, if any.
    pub fn image(&self) -> Option<&RasterImage> {
        self.image.as_ref()
    }

    /// Content bounds of the loaded image.
    pub fn content_bounds(&self) -> ContentBounds {
        self.bounds
    }

    /// The live texture, if one has been composited.
    pub fn texture(&self) -> Option<&TextureBuffer> {
        self.texture.as_ref()
    }

    /// Number of textures composited so far.
    pub fn texture_generation(&self) -> u64 {
        self.texture_generation
    }

    /// Whether an export would succeed (a texture exists).
    pub fn can_export(&self) -> bool {
        self.texture.is_some()
    }

    /// Register a new upload. Completing any earlier ticket afterwards is a no-op.
    pub fn begin_upload(&mut self) -> UploadTicket {
        self.next_ticket += 1;
        let ticket = UploadTicket(self.next_ticket);
        self.latest_ticket = Some(ticket);
        ticket
    }

    /// Decode `bytes` for `ticket` and adopt the image if the ticket is still current.
    ///
    /// Decode failures are reported even for stale tickets; the session state is left unchanged.
    pub fn finish_upload(
        &mut self,
        ticket: UploadTicket,
        bytes: &[u8],
    ) -> FrameResult<UploadOutcome> {
        let image = decode_image(bytes)?;
        self.finish_upload_decoded(ticket, image)
    }

    /// Adopt an already decoded image for `ticket` if the ticket is still current.
    pub fn finish_upload_decoded(
        &mut self,
        ticket: UploadTicket,
        image: RasterImage,
    ) -> FrameResult<UploadOutcome> {
        if self.latest_ticket != Some(ticket) {
            tracing::debug!(
                ticket = ticket.seq(),
                latest = self.latest_ticket.map(UploadTicket::seq),
                "ignoring stale upload completion"
            );
            return Ok(UploadOutcome::Stale);
        }
        self.set_image(image)?;
        Ok(UploadOutcome::Applied)
    }

    /// Begin and finish an upload in one step.
    pub fn load_image_bytes(&mut self, bytes: &[u8]) -> FrameResult<()> {
        let ticket = self.begin_upload();
        self.finish_upload(ticket, bytes).map(|_| ())
    }

    /// Replace the current image, detect its bounds and recomposite.
    ///
    /// The image is only adopted once its texture has been built.
    pub fn set_image(&mut self, image: RasterImage) -> FrameResult<()> {
        self.dims.validate()?;
        let bounds = detect_content_bounds(&image);
        let texture = compose_frame(&image, bounds, &self.dims, self.frame_color)?;
        self.image = Some(image);
        self.bounds = bounds;
        self.replace_texture(texture);
        Ok(())
    }

    /// Set the frame width; the border is re-clamped before recompositing.
    pub fn set_width_cm(&mut self, width_cm: f64) -> FrameResult<()> {
        let mut dims = self.dims;
        dims.set_width_cm(width_cm);
        self.apply(dims, self.frame_color)
    }

    /// Set the frame height; the border is re-clamped before recompositing.
    pub fn set_height_cm(&mut self, height_cm: f64) -> FrameResult<()> {
        let mut dims = self.dims;
        dims.set_height_cm(height_cm);
        self.apply(dims, self.frame_color)
    }

    /// Set the frame depth. Only the exported geometry changes.
    pub fn set_depth_cm(&mut self, depth_cm: f64) -> FrameResult<()> {
        let mut dims = self.dims;
        dims.set_depth_cm(depth_cm);
        dims.validate()?;
        self.dims = dims;
        Ok(())
    }

    /// Toggle the border band.
    pub fn set_border_enabled(&mut self, enabled: bool) -> FrameResult<()> {
        let mut dims = self.dims;
        dims.set_border_enabled(enabled);
        self.apply(dims, self.frame_color)
    }

    /// Set the border thickness (clamped to the current maximum).
    pub fn set_border_cm(&mut self, border_cm: f64) -> FrameResult<()> {
        let mut dims = self.dims;
        dims.set_border_cm(border_cm);
        self.apply(dims, self.frame_color)
    }

    /// Set the frame color used by the border fill and the solid faces.
    pub fn set_frame_color(&mut self, color: FrameColor) -> FrameResult<()> {
        self.apply(self.dims, color)
    }

    /// Recomposite the texture from the current image and parameters. No-op without an image.
    pub fn recompose(&mut self) -> FrameResult<()> {
        self.apply(self.dims, self.frame_color)
    }

    /// Validate `dims`, rebuild the texture if an image is loaded, then commit.
    ///
    /// On error the session keeps its previous parameters and texture.
    fn apply(&mut self, dims: DimensionModel, frame_color: FrameColor) -> FrameResult<()> {
        dims.validate()?;
        let texture = match self.image.as_ref() {
            Some(image) => Some(compose_frame(image, self.bounds, &dims, frame_color)?),
            None => None,
        };
        self.dims = dims;
        self.frame_color = frame_color;
        if let Some(texture) = texture {
            self.replace_texture(texture);
        }
        Ok(())
    }

    fn replace_texture(&mut self, texture: TextureBuffer) {
        if let Some(old) = self.texture.take() {
            tracing::debug!(
                generation = self.texture_generation,
                width = old.width(),
                height = old.height(),
                "releasing previous texture"
            );
            drop(old);
        }
        self.texture = Some(texture);
        self.texture_generation += 1;
    }

    /// Build the scene and encode it with `exporter`.
    ///
    /// Fails with [`FrameError::MissingInput`] before the first texture exists.
    pub fn export_with(&self, exporter: &dyn SceneExporter) -> FrameResult<Vec<u8>> {
        let texture = self
            .texture
            .as_ref()
            .ok_or_else(|| FrameError::missing_input(NO_IMAGE_NOTICE))?;
        self.dims.validate()?;
        let scene = build_scene(self.dims.to_meters(), self.frame_color, Some(texture))?;
        exporter.export(&scene, &ExportOptions::default())
    }

    /// Export with `exporter` and hand the bytes to `sink` under the default file name.
    ///
    /// Nothing reaches the sink when the export fails.
    pub fn export_to(
        &self,
        exporter: &dyn SceneExporter,
        sink: &mut dyn ByteSink,
    ) -> FrameResult<()> {
        let bytes = self.export_with(exporter)?;
        sink.save(DEFAULT_EXPORT_FILE_NAME, &bytes)
    }
}

fn compose_frame(
    image: &RasterImage,
    bounds: ContentBounds,
    dims: &DimensionModel,
    frame_color: FrameColor,
) -> FrameResult<TextureBuffer> {
    compose_texture(
        image,
        bounds,
        dims.width_cm(),
        dims.height_cm(),
        dims.effective_border_cm(),
        frame_color,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/session/frame_session.rs"]
mod tests;
