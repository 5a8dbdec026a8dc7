//! Interactive mesh-file resolution
//!
//! Decides which mesh file to export: an explicit argument wins, otherwise
//! the working directory is scanned for files with recognized extensions.
//! One candidate is taken automatically; zero or several fall back to an
//! interactive prompt. The prompt streams are generic so the loops can be
//! driven from in-memory buffers in tests.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::mesh::MeshFormat;

/// Outcome of file resolution.
#[derive(Debug)]
pub enum Resolution {
    /// A usable mesh file was chosen.
    File(PathBuf),
    /// The user asked to exit; not an error.
    Quit,
}

/// Resolve the mesh file to export.
///
/// `arg` is the `--file` value if one was given; `dir` is the directory to
/// scan for candidates. Prompts are read from `input` and written to `out`.
pub fn resolve_mesh_file<R: BufRead, W: Write>(
    arg: Option<&Path>,
    dir: &Path,
    input: &mut R,
    out: &mut W,
) -> Result<Resolution> {
    if let Some(path) = arg {
        if path.exists() {
            return Ok(Resolution::File(path.to_path_buf()));
        }
        tracing::warn!("Mesh file {:?} does not exist", path);
    }

    writeln!(
        out,
        "No mesh file provided. Looking for mesh files in current directory..."
    )?;
    let mut candidates = scan_mesh_files(dir)?;

    match candidates.len() {
        1 => {
            let path = candidates.remove(0);
            writeln!(out, "Found mesh file {}.", display_name(&path))?;
            Ok(Resolution::File(path))
        }
        0 => {
            writeln!(out, "No mesh files found in current directory.")?;
            prompt_for_path(input, out)
        }
        _ => {
            writeln!(out, "Multiple mesh files found in current directory.")?;
            prompt_for_selection(&candidates, input, out)
        }
    }
}

/// List files in `dir` with a recognized mesh extension, sorted by name so
/// the numbered selection list is deterministic.
fn scan_mesh_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in dir.read_dir()? {
        let path = entry?.path();
        if path.is_file() && MeshFormat::from_path(&path).is_some() {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

/// Prompt for a mesh file path until an existing one is given.
fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Resolution> {
    loop {
        write!(
            out,
            "Please enter the path to a mesh file or press 'q' to exit: "
        )?;
        out.flush()?;

        let Some(line) = read_prompt_line(input)? else {
            return Ok(Resolution::Quit);
        };
        if is_quit(&line) {
            return Ok(Resolution::Quit);
        }

        let path = PathBuf::from(&line);
        if path.exists() {
            return Ok(Resolution::File(path));
        }
        writeln!(out, "Invalid file path. Please try again.")?;
    }
}

/// Prompt for a 1-based selection index until a valid one is given.
fn prompt_for_selection<R: BufRead, W: Write>(
    candidates: &[PathBuf],
    input: &mut R,
    out: &mut W,
) -> Result<Resolution> {
    loop {
        writeln!(
            out,
            "Please select a mesh file from the list below or press 'q' to exit:"
        )?;
        for (i, path) in candidates.iter().enumerate() {
            writeln!(out, "{}: {}", i + 1, display_name(path))?;
        }
        out.flush()?;

        let Some(line) = read_prompt_line(input)? else {
            return Ok(Resolution::Quit);
        };
        if is_quit(&line) {
            return Ok(Resolution::Quit);
        }

        match line.parse::<usize>() {
            Ok(n) if (1..=candidates.len()).contains(&n) => {
                return Ok(Resolution::File(candidates[n - 1].clone()));
            }
            _ => writeln!(out, "Invalid selection. Please try again.")?,
        }
    }
}

/// Read one trimmed line; `None` means the input stream ended, which is
/// treated as a request to quit so a closed stdin cannot loop forever.
fn read_prompt_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit")
}

fn display_name(path: &Path) -> std::borrow::Cow<'_, str> {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
}
