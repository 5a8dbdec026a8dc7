//! PLY mesh loading

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};

use super::Mesh;
use crate::error::{ExportError, Result};

/// Load a PLY file (ASCII or binary, either endianness).
///
/// Expects `vertex` elements with `x`, `y`, `z` properties and `face`
/// elements with a `vertex_indices` (or `vertex_index`) list property.
pub(super) fn load_ply(path: &Path) -> Result<Mesh> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let parser = Parser::<DefaultElement>::new();
    let ply = parser.read_ply(&mut reader).map_err(|e| ExportError::Parse {
        path: path.to_path_buf(),
        details: format!("PLY parse error: {:?}", e),
    })?;

    let mut mesh = Mesh::default();

    if let Some(vertices) = ply.payload.get("vertex") {
        for element in vertices {
            let x = get_float(element.get("x"), "x", path)?;
            let y = get_float(element.get("y"), "y", path)?;
            let z = get_float(element.get("z"), "z", path)?;
            mesh.vertices.push([x, y, z]);
        }
    }

    if let Some(faces) = ply.payload.get("face") {
        for element in faces {
            // Face indices can be stored under either property name
            let indices = element
                .get("vertex_indices")
                .or_else(|| element.get("vertex_index"));

            let indices: Option<Vec<u32>> = match indices {
                Some(Property::ListInt(v)) => Some(v.iter().map(|&i| i as u32).collect()),
                Some(Property::ListUInt(v)) => Some(v.clone()),
                Some(Property::ListShort(v)) => Some(v.iter().map(|&i| i as u32).collect()),
                Some(Property::ListUShort(v)) => Some(v.iter().map(|&i| i as u32).collect()),
                Some(Property::ListUChar(v)) => Some(v.iter().map(|&i| i as u32).collect()),
                _ => None,
            };

            // Fan-triangulate polygons
            if let Some(indices) = indices {
                if indices.len() >= 3 {
                    for i in 1..indices.len() - 1 {
                        mesh.faces.push([indices[0], indices[i], indices[i + 1]]);
                    }
                }
            }
        }
    }

    tracing::debug!(
        "PLY loaded: {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );

    Ok(mesh)
}

/// Extract a float value from a PLY property.
fn get_float(prop: Option<&Property>, name: &str, path: &Path) -> Result<f64> {
    match prop {
        Some(Property::Float(v)) => Ok(*v as f64),
        Some(Property::Double(v)) => Ok(*v),
        Some(Property::Int(v)) => Ok(*v as f64),
        Some(Property::UInt(v)) => Ok(*v as f64),
        Some(Property::Short(v)) => Ok(*v as f64),
        Some(Property::UShort(v)) => Ok(*v as f64),
        Some(Property::Char(v)) => Ok(*v as f64),
        Some(Property::UChar(v)) => Ok(*v as f64),
        _ => Err(ExportError::Parse {
            path: path.to_path_buf(),
            details: format!("missing or invalid PLY property: {}", name),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASCII_PYRAMID: &str = "\
ply
format ascii 1.0
element vertex 5
property float x
property float y
property float z
element face 5
property list uchar int vertex_indices
end_header
0 0 0
1 0 0
1 1 0
0 1 0
0.5 0.5 1
4 0 1 2 3
3 0 1 4
3 1 2 4
3 2 3 4
3 3 0 4
";

    #[test]
    fn quad_base_is_fan_triangulated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pyramid.ply");
        std::fs::write(&path, ASCII_PYRAMID).unwrap();

        let mesh = load_ply(&path).unwrap();
        assert_eq!(mesh.vertex_count(), 5);
        // One quad (two triangles) plus four triangle sides
        assert_eq!(mesh.face_count(), 6);
        assert_eq!(mesh.faces[0], [0, 1, 2]);
        assert_eq!(mesh.faces[1], [0, 2, 3]);
        assert_eq!(mesh.vertices[4], [0.5, 0.5, 1.0]);
    }

    #[test]
    fn missing_coordinate_property_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.ply");
        let content = "\
ply
format ascii 1.0
element vertex 1
property float x
property float y
end_header
0 0
";
        std::fs::write(&path, content).unwrap();

        let err = load_ply(&path).unwrap_err();
        assert!(matches!(err, ExportError::Parse { .. }));
    }
}
