//! Mesh loading
//!
//! Dispatches on file extension to the format-specific loaders and flattens
//! their output into the face/vertex tables the exporter writes out.

mod obj;
mod off;
mod ply;
mod stl;

use std::path::Path;

use crate::error::{ExportError, Result};

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    Ply,
    Stl,
    Off,
    Obj,
}

impl MeshFormat {
    /// Detect format from file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .and_then(|ext| match ext.as_str() {
                "ply" => Some(MeshFormat::Ply),
                "stl" => Some(MeshFormat::Stl),
                "off" => Some(MeshFormat::Off),
                "obj" => Some(MeshFormat::Obj),
                _ => None,
            })
    }
}

/// Indexed triangle mesh: 3D vertex coordinates plus 0-based index triples.
///
/// Built once from loader output and discarded after export.
#[derive(Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<[u32; 3]>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Load a mesh from file, auto-detecting format from extension.
///
/// Polygonal faces are fan-triangulated by the loaders, so the result is
/// always a triangle mesh.
pub fn load_mesh(path: &Path) -> Result<Mesh> {
    if !path.exists() {
        return Err(ExportError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = MeshFormat::from_path(path).ok_or_else(|| ExportError::UnknownFormat {
        path: path.to_path_buf(),
    })?;

    tracing::info!("Loading mesh from {:?} (format: {:?})", path, format);

    let mesh = match format {
        MeshFormat::Ply => ply::load_ply(path)?,
        MeshFormat::Stl => stl::load_stl(path)?,
        MeshFormat::Off => off::load_off(path)?,
        MeshFormat::Obj => obj::load_obj(path)?,
    };

    // A loader can report success while yielding no usable geometry.
    if mesh.vertices.is_empty() {
        return Err(ExportError::EmptyMesh {
            path: path.to_path_buf(),
        });
    }

    tracing::info!(
        "Loaded mesh: {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_detection_is_case_insensitive() {
        assert_eq!(
            MeshFormat::from_path(Path::new("Room.PLY")),
            Some(MeshFormat::Ply)
        );
        assert_eq!(
            MeshFormat::from_path(Path::new("hall.stl")),
            Some(MeshFormat::Stl)
        );
        assert_eq!(
            MeshFormat::from_path(Path::new("box.Off")),
            Some(MeshFormat::Off)
        );
        assert_eq!(
            MeshFormat::from_path(Path::new("scene.obj")),
            Some(MeshFormat::Obj)
        );
        assert_eq!(MeshFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(MeshFormat::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let err = load_mesh(Path::new("does_not_exist.obj")).unwrap_err();
        assert!(matches!(err, ExportError::FileNotFound { .. }));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh.xyz");
        std::fs::write(&path, "not a mesh").unwrap();

        let err = load_mesh(&path).unwrap_err();
        assert!(matches!(err, ExportError::UnknownFormat { .. }));
    }

    #[test]
    fn empty_mesh_is_rejected_after_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.off");
        std::fs::write(&path, "OFF\n0 0 0\n").unwrap();

        let err = load_mesh(&path).unwrap_err();
        assert!(matches!(err, ExportError::EmptyMesh { .. }));
    }
}
