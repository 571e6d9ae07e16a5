use crate::assets::color::FrameColor;
use crate::assets::raster::RasterImage;
use crate::export::glb::{ExportOptions, GlbExporter, SceneExporter};
use crate::foundation::error::FrameResult;
use crate::model::dimensions::DimensionModel;
use crate::scene::model::build_scene;
use crate::texture::bounds::detect_content_bounds;
use crate::texture::compose::{TextureBuffer, compose_texture};

/// Detect the content bounds of `image` and composite the front-face texture for `dims`.
pub fn compose_for(
    image: &RasterImage,
    dims: &DimensionModel,
    frame_color: FrameColor,
) -> FrameResult<TextureBuffer> {
    dims.validate()?;
    let bounds = detect_content_bounds(image);
    compose_texture(
        image,
        bounds,
        dims.width_cm(),
        dims.height_cm(),
        dims.effective_border_cm(),
        frame_color,
    )
}

/// Run the whole pipeline: bounds, texture, scene and binary glTF bytes.
pub fn export_frame_glb(
    image: &RasterImage,
    dims: &DimensionModel,
    frame_color: FrameColor,
) -> FrameResult<Vec<u8>> {
    let texture = compose_for(image, dims, frame_color)?;
    let scene = build_scene(dims.to_meters(), frame_color, Some(&texture))?;
    GlbExporter::default().export(&scene, &ExportOptions::default())
}
