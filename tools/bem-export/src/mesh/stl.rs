//! STL mesh loading

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::Mesh;
use crate::error::{ExportError, Result};

/// Load an STL file (binary or ASCII).
///
/// `stl_io::read_stl` welds duplicate corner vertices, so the result is an
/// indexed mesh even though STL stores loose triangles.
pub(super) fn load_stl(path: &Path) -> Result<Mesh> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let stl = stl_io::read_stl(&mut reader).map_err(|e| ExportError::Parse {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let mut mesh = Mesh::default();

    // Vertex is a newtype over [f32; 3]
    for v in &stl.vertices {
        mesh.vertices
            .push([v.0[0] as f64, v.0[1] as f64, v.0[2] as f64]);
    }

    // IndexedTriangle carries usize indices into the welded vertex table
    for face in &stl.faces {
        mesh.faces.push([
            face.vertices[0] as u32,
            face.vertices[1] as u32,
            face.vertices[2] as u32,
        ]);
    }

    tracing::debug!(
        "STL loaded: {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );

    Ok(mesh)
}
