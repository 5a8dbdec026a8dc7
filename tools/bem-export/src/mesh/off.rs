//! OFF mesh loading
//!
//! OFF has no established parsing crate, so the reader here is a small
//! line-oriented parser: strip comments and blanks, read the counts, then
//! the vertex and face lists. Polygonal faces are fan-triangulated.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::Mesh;
use crate::error::{ExportError, Result};

pub(super) fn load_off(path: &Path) -> Result<Mesh> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    // OFF comments run from '#' to end of line
    let mut lines: Vec<String> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.split('#').next().unwrap_or("").trim().to_string();
        if !line.is_empty() {
            lines.push(line);
        }
    }

    let mut iter = lines.iter().map(String::as_str);

    let mut header = iter
        .next()
        .ok_or_else(|| parse_error(path, "file is empty"))?;

    // The magic line may carry the counts ("OFF 8 6 12") or stand alone
    if let Some(rest) = header.strip_prefix("OFF") {
        let rest = rest.trim();
        header = if rest.is_empty() {
            iter.next()
                .ok_or_else(|| parse_error(path, "missing element counts"))?
        } else {
            rest
        };
    }

    let counts: Vec<&str> = header.split_whitespace().collect();
    if counts.len() < 2 {
        return Err(parse_error(path, "expected vertex and face counts"));
    }
    let n_vertices = parse_count(path, counts[0])?;
    let n_faces = parse_count(path, counts[1])?;

    let mut mesh = Mesh::default();

    for _ in 0..n_vertices {
        let line = iter
            .next()
            .ok_or_else(|| parse_error(path, "unexpected end of file in vertex list"))?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(parse_error(
                path,
                &format!("malformed vertex line: '{}'", line),
            ));
        }
        let x = parse_coord(path, parts[0])?;
        let y = parse_coord(path, parts[1])?;
        let z = parse_coord(path, parts[2])?;
        mesh.vertices.push([x, y, z]);
    }

    for _ in 0..n_faces {
        let line = iter
            .next()
            .ok_or_else(|| parse_error(path, "unexpected end of file in face list"))?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let arity = parse_count(path, parts[0])?;
        if parts.len() < arity + 1 {
            return Err(parse_error(
                path,
                &format!("malformed face line: '{}'", line),
            ));
        }
        let indices = parts[1..=arity]
            .iter()
            .map(|token| parse_index(path, token))
            .collect::<Result<Vec<u32>>>()?;

        // Fan-triangulate polygons
        if indices.len() >= 3 {
            for i in 1..indices.len() - 1 {
                mesh.faces.push([indices[0], indices[i], indices[i + 1]]);
            }
        }
    }

    // Anything after the face list is ignored

    tracing::debug!(
        "OFF loaded: {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );

    Ok(mesh)
}

fn parse_error(path: &Path, details: &str) -> ExportError {
    ExportError::Parse {
        path: path.to_path_buf(),
        details: details.to_string(),
    }
}

fn parse_count(path: &Path, token: &str) -> Result<usize> {
    token
        .parse()
        .map_err(|e| parse_error(path, &format!("invalid count '{}': {}", token, e)))
}

fn parse_coord(path: &Path, token: &str) -> Result<f64> {
    token
        .parse()
        .map_err(|e| parse_error(path, &format!("invalid coordinate '{}': {}", token, e)))
}

fn parse_index(path: &Path, token: &str) -> Result<u32> {
    token
        .parse()
        .map_err(|e| parse_error(path, &format!("invalid vertex index '{}': {}", token, e)))
}
