//! Integration tests for bem-absorb
//!
//! Tests the full pipeline: write a face table -> generate absorptions ->
//! verify the output line per line.

use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const DEFAULT_LINE: &str = "6.400000000000000e-01";

/// One default coefficient line per face
#[test]
fn test_default_absorption_table() {
    let dir = tempdir().expect("Failed to create temp dir");
    let faces_path = dir.path().join("Faces.dat");
    let output_path = dir.path().join("Absorptions.dat");

    // The exporter right-justifies the count in a 10-character field
    std::fs::write(&faces_path, "        12\n         0           1           2\n")
        .expect("Failed to write face table");

    bem_absorb(&faces_path, &output_path, &[]);

    let lines = read_lines(&output_path);
    assert_eq!(lines.len(), 12, "Expected one line per face");
    assert!(lines.iter().all(|l| l == DEFAULT_LINE), "Lines: {:?}", lines);
}

/// A zero face count yields an empty output file
#[test]
fn test_zero_faces() {
    let dir = tempdir().expect("Failed to create temp dir");
    let faces_path = dir.path().join("Faces.dat");
    let output_path = dir.path().join("Absorptions.dat");

    std::fs::write(&faces_path, "         0\n").expect("Failed to write face table");

    bem_absorb(&faces_path, &output_path, &[]);

    assert!(output_path.exists(), "Output file should still be created");
    assert!(read_lines(&output_path).is_empty());
}

/// --coefficient overrides the default value
#[test]
fn test_coefficient_override() {
    let dir = tempdir().expect("Failed to create temp dir");
    let faces_path = dir.path().join("Faces.dat");
    let output_path = dir.path().join("Absorptions.dat");

    std::fs::write(&faces_path, "         2\n").expect("Failed to write face table");

    bem_absorb(&faces_path, &output_path, &["--coefficient", "0.5"]);

    let lines = read_lines(&output_path);
    assert_eq!(lines, vec!["5.000000000000000e-01"; 2]);
}

/// A non-integer count line must fail before any output is written
#[test]
fn test_malformed_count_is_fatal() {
    let dir = tempdir().expect("Failed to create temp dir");
    let faces_path = dir.path().join("Faces.dat");
    let output_path = dir.path().join("Absorptions.dat");

    std::fs::write(&faces_path, "abc\n").expect("Failed to write face table");

    let status = bem_absorb_command(&faces_path, &output_path, &[])
        .status()
        .expect("Failed to run bem-absorb");
    assert!(!status.success(), "Malformed count should be rejected");
    assert!(!output_path.exists(), "No output should be written");
}

/// A missing face table must fail before any output is written
#[test]
fn test_missing_face_table_is_fatal() {
    let dir = tempdir().expect("Failed to create temp dir");
    let faces_path = dir.path().join("Faces.dat");
    let output_path = dir.path().join("Absorptions.dat");

    let status = bem_absorb_command(&faces_path, &output_path, &[])
        .status()
        .expect("Failed to run bem-absorb");
    assert!(!status.success(), "Missing face table should be rejected");
    assert!(!output_path.exists(), "No output should be written");
}

// Helper to run bem-absorb with explicit paths
fn bem_absorb(faces: &Path, output: &Path, extra_args: &[&str]) {
    let status = bem_absorb_command(faces, output, extra_args)
        .status()
        .expect("Failed to run bem-absorb");
    assert!(status.success(), "bem-absorb failed");
}

fn bem_absorb_command(faces: &Path, output: &Path, extra_args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_bem-absorb"));
    command.args([
        "--faces",
        faces.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);
    command.args(extra_args);
    command
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read output file")
        .lines()
        .map(str::to_string)
        .collect()
}
