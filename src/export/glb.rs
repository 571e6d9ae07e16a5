//! Binary glTF 2.0 (`.glb`) export.
//!
//! Layout: a 12-byte header (`glTF`, version 2, total length), a JSON chunk padded with spaces and
//! a BIN chunk padded with zeros, both to 4-byte boundaries. The BIN chunk holds, in order, the
//! vertex positions, normals, UVs, the six per-face index runs and the PNG-encoded texture.

use crate::export::gltf_json as json;
use crate::foundation::error::{FrameError, FrameResult};
use crate::scene::geometry::Face;
use crate::scene::model::{FaceMaterial, NO_IMAGE_NOTICE, SceneDescriptor, SolidMaterial};

const GLB_MAGIC: u32 = 0x4654_6C67;
const GLB_VERSION: u32 = 2;
const CHUNK_JSON: u32 = 0x4E4F_534A;
const CHUNK_BIN: u32 = 0x004E_4942;

/// Options handed to a [`SceneExporter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// Request binary output (`.glb`) instead of textual JSON.
    pub binary: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { binary: true }
    }
}

/// Serializes a [`SceneDescriptor`] into an interchange file.
pub trait SceneExporter {
    /// Produce the encoded file bytes for `scene`.
    fn export(&self, scene: &SceneDescriptor<'_>, opts: &ExportOptions) -> FrameResult<Vec<u8>>;
}

/// Exporter producing a self-contained binary glTF 2.0 file.
#[derive(Clone, Debug)]
pub struct GlbExporter {
    generator: String,
}

impl Default for GlbExporter {
    fn default() -> Self {
        Self {
            generator: format!("photoframe {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl GlbExporter {
    /// Exporter that stamps `generator` into the asset header.
    pub fn with_generator(generator: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
        }
    }
}

impl SceneExporter for GlbExporter {
    #[tracing::instrument(skip_all, fields(binary = opts.binary))]
    fn export(&self, scene: &SceneDescriptor<'_>, opts: &ExportOptions) -> FrameResult<Vec<u8>> {
        if !opts.binary {
            return Err(FrameError::export(
                "GlbExporter only writes binary glTF; textual output was requested",
            ));
        }
        let texture = scene
            .texture()
            .ok_or_else(|| FrameError::missing_input(NO_IMAGE_NOTICE))?;

        let mesh = scene.mesh();
        let png = texture.to_png_bytes()?;

        let mut bin = BinBuilder::default();
        let mut views = Vec::new();
        let mut accessors = Vec::new();

        let (min, max) = mesh.position_bounds();
        let positions = bin.push(&f32_bytes(mesh.positions.iter().flatten()))?;
        views.push(positions.view(Some(json::TARGET_ARRAY_BUFFER)));
        accessors.push(json::Accessor {
            buffer_view: 0,
            byte_offset: 0,
            component_type: json::COMPONENT_FLOAT,
            count: mesh.positions.len() as u32,
            kind: "VEC3",
            min: Some(min.to_vec()),
            max: Some(max.to_vec()),
        });

        let normals = bin.push(&f32_bytes(mesh.normals.iter().flatten()))?;
        views.push(normals.view(Some(json::TARGET_ARRAY_BUFFER)));
        accessors.push(float_accessor(1, mesh.normals.len(), "VEC3"));

        let uvs = bin.push(&f32_bytes(mesh.uvs.iter().flatten()))?;
        views.push(uvs.view(Some(json::TARGET_ARRAY_BUFFER)));
        accessors.push(float_accessor(2, mesh.uvs.len(), "VEC2"));

        let index_bytes: Vec<u8> = mesh.indices.iter().flat_map(|i| i.to_le_bytes()).collect();
        let indices = bin.push(&index_bytes)?;
        views.push(indices.view(Some(json::TARGET_ELEMENT_ARRAY_BUFFER)));
        let first_index_accessor = accessors.len() as u32;
        for group in mesh.groups {
            accessors.push(json::Accessor {
                buffer_view: 3,
                byte_offset: (group.start * std::mem::size_of::<u16>()) as u32,
                component_type: json::COMPONENT_UNSIGNED_SHORT,
                count: group.count as u32,
                kind: "SCALAR",
                min: None,
                max: None,
            });
        }

        let image = bin.push(&png)?;
        views.push(image.view(None));

        let (materials, material_of_face) = collect_materials(scene)?;
        let primitives = Face::ALL
            .iter()
            .map(|face| json::Primitive {
                attributes: json::Attributes {
                    position: 0,
                    normal: 1,
                    texcoord_0: 2,
                },
                indices: first_index_accessor + face.slot() as u32,
                material: material_of_face[face.slot()],
                mode: json::MODE_TRIANGLES,
            })
            .collect();

        let bin = bin.finish();
        let doc = json::Document {
            asset: json::Asset {
                version: "2.0",
                generator: self.generator.clone(),
            },
            scene: 0,
            scenes: vec![json::Scene { nodes: vec![0] }],
            nodes: vec![json::Node {
                name: "photo-frame".to_owned(),
                mesh: 0,
            }],
            meshes: vec![json::Mesh {
                name: "photo-frame".to_owned(),
                primitives,
            }],
            materials,
            textures: vec![json::Texture {
                sampler: 0,
                source: 0,
            }],
            samplers: vec![json::Sampler {
                mag_filter: json::FILTER_LINEAR,
                min_filter: json::FILTER_LINEAR_MIPMAP_LINEAR,
                wrap_s: json::WRAP_CLAMP_TO_EDGE,
                wrap_t: json::WRAP_CLAMP_TO_EDGE,
            }],
            images: vec![json::Image {
                mime_type: "image/png",
                buffer_view: 4,
            }],
            accessors,
            buffer_views: views,
            buffers: vec![json::Buffer {
                byte_length: len_u32(bin.len())?,
            }],
        };

        let json_bytes = serde_json::to_vec(&doc)
            .map_err(|e| FrameError::export(format!("serialize gltf json: {e}")))?;
        let out = assemble_glb(json_bytes, bin)?;

        tracing::info!(
            bytes = out.len(),
            texture_w = texture.width(),
            texture_h = texture.height(),
            "exported binary gltf"
        );
        Ok(out)
    }
}

fn float_accessor(buffer_view: u32, count: usize, kind: &'static str) -> json::Accessor {
    json::Accessor {
        buffer_view,
        byte_offset: 0,
        component_type: json::COMPONENT_FLOAT,
        count: count as u32,
        kind,
        min: None,
        max: None,
    }
}

/// Deduplicate face materials; returns the material list and each face's index into it.
fn collect_materials(scene: &SceneDescriptor<'_>) -> FrameResult<(Vec<json::Material>, [u32; 6])> {
    let mut materials = Vec::new();
    let mut solids: Vec<(SolidMaterial, u32)> = Vec::new();
    let mut textured: Option<u32> = None;
    let mut material_of_face = [0u32; 6];

    for face in Face::ALL {
        let idx = match scene.material(face) {
            FaceMaterial::Solid(m) => {
                if let Some(&(_, i)) = solids.iter().find(|(s, _)| *s == m) {
                    i
                } else {
                    let i = materials.len() as u32;
                    let [r, g, b] = m.color.to_linear_rgb();
                    materials.push(json::Material {
                        name: format!("frame-{}", m.color.to_hex().trim_start_matches('#')),
                        pbr_metallic_roughness: json::PbrMetallicRoughness {
                            base_color_factor: Some([r, g, b, 1.0]),
                            base_color_texture: None,
                            metallic_factor: m.metalness,
                            roughness_factor: m.roughness,
                        },
                    });
                    solids.push((m, i));
                    i
                }
            }
            FaceMaterial::Textured(t) => {
                let first = scene
                    .texture()
                    .ok_or_else(|| FrameError::missing_input(NO_IMAGE_NOTICE))?;
                if !std::ptr::eq(t, first) {
                    return Err(FrameError::export(
                        "scene references more than one texture buffer",
                    ));
                }
                match textured {
                    Some(i) => i,
                    None => {
                        let i = materials.len() as u32;
                        let mat = FaceMaterial::Textured(t);
                        materials.push(json::Material {
                            name: "photo".to_owned(),
                            pbr_metallic_roughness: json::PbrMetallicRoughness {
                                base_color_factor: None,
                                base_color_texture: Some(json::TextureInfo { index: 0 }),
                                metallic_factor: mat.metalness(),
                                roughness_factor: mat.roughness(),
                            },
                        });
                        textured = Some(i);
                        i
                    }
                }
            }
        };
        material_of_face[face.slot()] = idx;
    }

    Ok((materials, material_of_face))
}

#[derive(Default)]
struct BinBuilder {
    bytes: Vec<u8>,
}

#[derive(Clone, Copy)]
struct BinSlice {
    offset: u32,
    len: u32,
}

impl BinSlice {
    fn view(self, target: Option<u32>) -> json::BufferView {
        json::BufferView {
            buffer: 0,
            byte_offset: self.offset,
            byte_length: self.len,
            target,
        }
    }
}

impl BinBuilder {
    /// Append `data` at the next 4-byte boundary.
    fn push(&mut self, data: &[u8]) -> FrameResult<BinSlice> {
        pad_to_4(&mut self.bytes, 0);
        let offset = len_u32(self.bytes.len())?;
        let len = len_u32(data.len())?;
        self.bytes.extend_from_slice(data);
        Ok(BinSlice { offset, len })
    }

    fn finish(mut self) -> Vec<u8> {
        pad_to_4(&mut self.bytes, 0);
        self.bytes
    }
}

fn f32_bytes<'a>(values: impl Iterator<Item = &'a f32>) -> Vec<u8> {
    values.flat_map(|v| v.to_le_bytes()).collect()
}

fn pad_to_4(buf: &mut Vec<u8>, fill: u8) {
    while !buf.len().is_multiple_of(4) {
        buf.push(fill);
    }
}

fn len_u32(len: usize) -> FrameResult<u32> {
    u32::try_from(len).map_err(|_| FrameError::export("glb payload exceeds 4 GiB"))
}

fn assemble_glb(mut json_bytes: Vec<u8>, bin: Vec<u8>) -> FrameResult<Vec<u8>> {
    pad_to_4(&mut json_bytes, b' ');

    let total = 12 + 8 + json_bytes.len() + 8 + bin.len();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&GLB_MAGIC.to_le_bytes());
    out.extend_from_slice(&GLB_VERSION.to_le_bytes());
    out.extend_from_slice(&len_u32(total)?.to_le_bytes());

    out.extend_from_slice(&len_u32(json_bytes.len())?.to_le_bytes());
    out.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    out.extend_from_slice(&json_bytes);

    out.extend_from_slice(&len_u32(bin.len())?.to_le_bytes());
    out.extend_from_slice(&CHUNK_BIN.to_le_bytes());
    out.extend_from_slice(&bin);
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/export/glb.rs"]
mod tests;
