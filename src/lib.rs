//! Photoframe turns a photo into a framed 3D object.
//!
//! The pipeline is:
//!
//! - Detect the opaque content bounds of a decoded image ([`detect_content_bounds`])
//! - Composite those bounds onto a frame-colored texture with an optional border ([`compose_texture`])
//! - Build a rectangular prism whose front face carries the texture ([`build_scene`])
//! - Encode it as a binary glTF file ([`GlbExporter`])
//!
//! [`FrameSession`] owns the mutable state of an interactive edit (current image, parameters, the
//! single live texture) and recomposites on every change. [`export_frame_glb`] runs the same steps
//! as one pure function.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Image color, decoding and raster storage.
pub mod assets;
/// JSON configuration.
pub mod config;
/// Scene export and byte sinks.
pub mod export;
/// Frame dimensions.
pub mod model;
/// Pure end-to-end pipeline.
pub mod pipeline;
pub mod scene;
pub mod session;
pub mod texture;

pub use crate::foundation::core::{Affine, Canvas, ContentBounds, Point, Rect, Rgba8Premul, Vec2};
pub use crate::foundation::error::{FrameError, FrameResult};

pub use crate::assets::color::FrameColor;
pub use crate::assets::decode::decode_image;
pub use crate::assets::raster::RasterImage;
pub use crate::config::{BorderConfig, FrameConfig};
pub use crate::export::glb::{ExportOptions, GlbExporter, SceneExporter};
pub use crate::export::sink::{ByteSink, DEFAULT_EXPORT_FILE_NAME, FileSink, InMemorySink};
pub use crate::model::dimensions::{DimensionModel, MeterDims};
pub use crate::pipeline::{compose_for, export_frame_glb};
pub use crate::scene::geometry::{BoxMesh, Face, build_box_mesh};
pub use crate::scene::model::{
    FaceMaterial, NO_IMAGE_NOTICE, SceneDescriptor, SolidMaterial, build_scene,
};
pub use crate::session::frame_session::{FrameSession, UploadOutcome, UploadTicket};
pub use crate::texture::bounds::detect_content_bounds;
pub use crate::texture::compose::{
    BorderInsets, ColorSpace, MAX_TEXTURE_SIZE, TextureBuffer, border_insets, compose_texture,
    inner_rect, texture_canvas_for,
};
