//! OBJ mesh loading

use std::path::Path;

use super::Mesh;
use crate::error::{ExportError, Result};

/// Load an OBJ file, triangulated and with a single index per vertex.
pub(super) fn load_obj(path: &Path) -> Result<Mesh> {
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|e| ExportError::Parse {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    // Merge all models into a single mesh; indices are per-model and need an
    // offset into the combined vertex table.
    let mut mesh = Mesh::default();
    let mut vertex_offset = 0u32;

    for model in &models {
        let obj_mesh = &model.mesh;

        for chunk in obj_mesh.positions.chunks(3) {
            if chunk.len() == 3 {
                mesh.vertices
                    .push([chunk[0] as f64, chunk[1] as f64, chunk[2] as f64]);
            }
        }

        for chunk in obj_mesh.indices.chunks(3) {
            if chunk.len() == 3 {
                mesh.faces.push([
                    chunk[0] + vertex_offset,
                    chunk[1] + vertex_offset,
                    chunk[2] + vertex_offset,
                ]);
            }
        }

        vertex_offset = mesh.vertices.len() as u32;
    }

    tracing::debug!(
        "OBJ loaded: {} vertices, {} faces from {} models",
        mesh.vertex_count(),
        mesh.face_count(),
        models.len()
    );

    Ok(mesh)
}
