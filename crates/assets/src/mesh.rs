//! glTF mesh extraction with scene-graph transform composition.

use glam::{Mat4, Vec3};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading a model file.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load glTF: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("model {0:?} contains no triangle geometry")]
    MissingGeometry(PathBuf),
}

/// Triangle mesh data extracted from one glTF primitive. Vertices are in
/// model space: node transforms down the scene graph are already applied.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<[u32; 3]>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }
}

/// Load every triangle primitive from a glTF/GLB file.
///
/// Nested nodes are flattened: each primitive becomes one `MeshData` with
/// the composed node transform baked into its vertices.
pub fn load_meshes(path: &Path) -> Result<Vec<MeshData>, AssetError> {
    let (document, buffers, _images) = gltf::import(path)?;

    let mut meshes = Vec::new();
    for scene in document.scenes() {
        for node in scene.nodes() {
            collect_node(&node, Mat4::IDENTITY, &buffers, &mut meshes);
        }
    }

    if meshes.is_empty() {
        return Err(AssetError::MissingGeometry(path.to_path_buf()));
    }
    log::debug!(
        "Loaded {} mesh primitive(s) from {:?}",
        meshes.len(),
        path
    );
    Ok(meshes)
}

fn collect_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<MeshData>,
) {
    let local = Mat4::from_cols_array_2d(&node.transform().matrix());
    let world = parent * local;

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|b| &*b.0));

            let vertices: Vec<Vec3> = match reader.read_positions() {
                Some(positions) => positions
                    .map(|p| world.transform_point3(Vec3::from(p)))
                    .collect(),
                None => continue,
            };

            let flat: Vec<u32> = match reader.read_indices() {
                Some(indices) => indices.into_u32().collect(),
                // Non-indexed primitive: consecutive vertex triples.
                None => (0..vertices.len() as u32).collect(),
            };
            let indices: Vec<[u32; 3]> = flat
                .chunks_exact(3)
                .map(|tri| [tri[0], tri[1], tri[2]])
                .collect();

            if !vertices.is_empty() && !indices.is_empty() {
                out.push(MeshData { vertices, indices });
            }
        }
    }

    for child in node.children() {
        collect_node(&child, world, buffers, out);
    }
}
