/// Binary glTF exporter.
pub mod glb;
pub(crate) mod gltf_json;
/// Byte sink trait and built-in sinks.
pub mod sink;
