//! Fixed-format `.dat` serialization
//!
//! The downstream solver reads these tables with fixed-format readers, so
//! every column is right-justified into a fixed-width field:
//!
//! - `Faces.dat`: line 1 is the face count in a 10-character field, then one
//!   line per face with the three vertex indices in 10/11/11-character
//!   fields separated by single spaces.
//! - `Vertices.dat`: line 1 is the vertex count in a 10-character field,
//!   then one line per vertex with the three coordinates in 30-character
//!   fields, 18 decimal digits, separated by single spaces.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{ExportError, Result};
use crate::mesh::Mesh;

/// Write the face table: count header plus one index triple per line.
pub fn write_faces<W: Write>(w: &mut W, faces: &[[u32; 3]]) -> Result<()> {
    writeln!(w, "{:10}", faces.len())?;
    for &[v1, v2, v3] in faces {
        writeln!(w, "{:10} {:11} {:11}", v1, v2, v3)?;
    }
    Ok(())
}

/// Write the vertex table: count header plus one coordinate triple per line.
pub fn write_vertices<W: Write>(w: &mut W, vertices: &[[f64; 3]]) -> Result<()> {
    writeln!(w, "{:10}", vertices.len())?;
    for &[x, y, z] in vertices {
        writeln!(w, "{:30.18} {:30.18} {:30.18}", x, y, z)?;
    }
    Ok(())
}

/// Write both tables for a mesh.
pub fn write_dat_files(mesh: &Mesh, faces_path: &Path, vertices_path: &Path) -> Result<()> {
    let mut faces = BufWriter::new(File::create(faces_path)?);
    write_faces(&mut faces, &mesh.faces)?;
    faces.flush()?;

    let mut vertices = BufWriter::new(File::create(vertices_path)?);
    write_vertices(&mut vertices, &mesh.vertices)?;
    vertices.flush()?;

    Ok(())
}

/// Read the face count from the first line of a face table.
///
/// Content past the first line is not inspected.
pub fn read_face_count(path: &Path) -> Result<usize> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    line.trim()
        .parse()
        .map_err(|source| ExportError::MalformedCount {
            path: path.to_path_buf(),
            source,
        })
}
