use crate::assets::color::FrameColor;
use crate::foundation::error::{FrameError, FrameResult};
use crate::model::dimensions::MeterDims;
use crate::scene::geometry::{BoxMesh, Face, build_box_mesh};
use crate::texture::compose::TextureBuffer;

/// Notice shown when an export is attempted before any image was composited.
pub const NO_IMAGE_NOTICE: &str = "Please select an image first!";

/// Flat painted material used on the five plain faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolidMaterial {
    /// Base color (sRGB).
    pub color: FrameColor,
    /// Metalness factor in `0..=1`.
    pub metalness: f64,
    /// Roughness factor in `0..=1`.
    pub roughness: f64,
}

impl SolidMaterial {
    /// Matte, barely metallic finish that reads like painted wood.
    pub fn painted(color: FrameColor) -> Self {
        Self {
            color,
            metalness: 0.1,
            roughness: 0.8,
        }
    }
}

/// Material assigned to one face of the prism.
#[derive(Clone, Copy, Debug)]
pub enum FaceMaterial<'a> {
    /// Flat color.
    Solid(SolidMaterial),
    /// Photo texture on a plain dielectric surface.
    Textured(&'a TextureBuffer),
}

impl FaceMaterial<'_> {
    /// Metalness factor.
    pub fn metalness(&self) -> f64 {
        match self {
            FaceMaterial::Solid(m) => m.metalness,
            FaceMaterial::Textured(_) => 0.0,
        }
    }

    /// Roughness factor.
    pub fn roughness(&self) -> f64 {
        match self {
            FaceMaterial::Solid(m) => m.roughness,
            FaceMaterial::Textured(_) => 1.0,
        }
    }
}

/// Everything an exporter needs for the framed photo: one box, six face materials.
#[derive(Clone, Debug)]
pub struct SceneDescriptor<'a> {
    /// Box size in metres.
    pub dims: MeterDims,
    /// Shared frame color.
    pub frame_color: FrameColor,
    /// Materials in [`Face::ALL`] order.
    pub materials: [FaceMaterial<'a>; 6],
}

impl<'a> SceneDescriptor<'a> {
    /// Material of `face`.
    pub fn material(&self, face: Face) -> FaceMaterial<'a> {
        self.materials[face.slot()]
    }

    /// The texture used by the scene, if any face is textured.
    pub fn texture(&self) -> Option<&'a TextureBuffer> {
        self.materials.iter().find_map(|m| match m {
            FaceMaterial::Textured(t) => Some(*t),
            FaceMaterial::Solid(_) => None,
        })
    }

    /// Triangle mesh for the box.
    pub fn mesh(&self) -> BoxMesh {
        build_box_mesh(self.dims)
    }
}

/// Assemble the framed-photo scene.
///
/// Fails with [`FrameError::MissingInput`] when no texture has been composited yet.
pub fn build_scene(
    dims: MeterDims,
    frame_color: FrameColor,
    texture: Option<&TextureBuffer>,
) -> FrameResult<SceneDescriptor<'_>> {
    let texture = texture.ok_or_else(|| FrameError::missing_input(NO_IMAGE_NOTICE))?;

    for (name, v) in [
        ("width", dims.width),
        ("height", dims.height),
        ("depth", dims.depth),
    ] {
        if !v.is_finite() || v <= 0.0 {
            return Err(FrameError::validation(format!(
                "box {name} must be finite and > 0 (got {v} m)"
            )));
        }
    }

    let plain = FaceMaterial::Solid(SolidMaterial::painted(frame_color));
    let mut materials = [plain; 6];
    materials[Face::Front.slot()] = FaceMaterial::Textured(texture);

    Ok(SceneDescriptor {
        dims,
        frame_color,
        materials,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
