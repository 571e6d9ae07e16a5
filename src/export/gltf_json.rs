//! The subset of the glTF 2.0 JSON schema the exporter writes.

use serde::Serialize;

pub(crate) const COMPONENT_UNSIGNED_SHORT: u32 = 5123;
pub(crate) const COMPONENT_FLOAT: u32 = 5126;
pub(crate) const TARGET_ARRAY_BUFFER: u32 = 34962;
pub(crate) const TARGET_ELEMENT_ARRAY_BUFFER: u32 = 34963;
pub(crate) const MODE_TRIANGLES: u32 = 4;
pub(crate) const FILTER_LINEAR: u32 = 9729;
pub(crate) const FILTER_LINEAR_MIPMAP_LINEAR: u32 = 9987;
pub(crate) const WRAP_CLAMP_TO_EDGE: u32 = 33071;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Document {
    pub(crate) asset: Asset,
    pub(crate) scene: u32,
    pub(crate) scenes: Vec<Scene>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) meshes: Vec<Mesh>,
    pub(crate) materials: Vec<Material>,
    pub(crate) textures: Vec<Texture>,
    pub(crate) samplers: Vec<Sampler>,
    pub(crate) images: Vec<Image>,
    pub(crate) accessors: Vec<Accessor>,
    pub(crate) buffer_views: Vec<BufferView>,
    pub(crate) buffers: Vec<Buffer>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Asset {
    pub(crate) version: &'static str,
    pub(crate) generator: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct Scene {
    pub(crate) nodes: Vec<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Node {
    pub(crate) name: String,
    pub(crate) mesh: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct Mesh {
    pub(crate) name: String,
    pub(crate) primitives: Vec<Primitive>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Primitive {
    pub(crate) attributes: Attributes,
    pub(crate) indices: u32,
    pub(crate) material: u32,
    pub(crate) mode: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct Attributes {
    #[serde(rename = "POSITION")]
    pub(crate) position: u32,
    #[serde(rename = "NORMAL")]
    pub(crate) normal: u32,
    #[serde(rename = "TEXCOORD_0")]
    pub(crate) texcoord_0: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Material {
    pub(crate) name: String,
    pub(crate) pbr_metallic_roughness: PbrMetallicRoughness,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PbrMetallicRoughness {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) base_color_factor: Option<[f64; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) base_color_texture: Option<TextureInfo>,
    pub(crate) metallic_factor: f64,
    pub(crate) roughness_factor: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct TextureInfo {
    pub(crate) index: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct Texture {
    pub(crate) sampler: u32,
    pub(crate) source: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Sampler {
    pub(crate) mag_filter: u32,
    pub(crate) min_filter: u32,
    pub(crate) wrap_s: u32,
    pub(crate) wrap_t: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Image {
    pub(crate) mime_type: &'static str,
    pub(crate) buffer_view: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Accessor {
    pub(crate) buffer_view: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub(crate) byte_offset: u32,
    pub(crate) component_type: u32,
    pub(crate) count: u32,
    #[serde(rename = "type")]
    pub(crate) kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) min: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max: Option<Vec<f32>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BufferView {
    pub(crate) buffer: u32,
    pub(crate) byte_offset: u32,
    pub(crate) byte_length: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) target: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Buffer {
    pub(crate) byte_length: u32,
}

fn is_zero(v: &u32) -> bool {
    *v == 0
}
