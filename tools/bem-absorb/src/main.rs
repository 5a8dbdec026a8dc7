//! bem-absorb - per-face absorption table generator
//!
//! Reads the face count from the head of Faces.dat and writes
//! Absorptions.dat with one absorption coefficient per face. The solver
//! expects one value per mesh face; this tool supplies a uniform default.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Absorption coefficient applied when none is specified.
const DEFAULT_COEFFICIENT: f64 = 0.64;

#[derive(Parser)]
#[command(name = "bem-absorb")]
#[command(about = "Generate a uniform per-face absorption table for the BEM solver")]
#[command(version)]
struct Cli {
    /// Absorption coefficient assigned to every face
    #[arg(short, long, default_value_t = DEFAULT_COEFFICIENT)]
    coefficient: f64,

    /// Input face table whose first line is the face count
    #[arg(long, default_value = "Faces.dat")]
    faces: PathBuf,

    /// Output absorption table
    #[arg(short, long, default_value = "Absorptions.dat")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    tracing::info!("Reading number of mesh faces from {:?}", cli.faces);
    let num_faces = bem_export::dat::read_face_count(&cli.faces)?;

    tracing::info!("Writing {} absorption values to {:?}", num_faces, cli.output);
    let mut writer = BufWriter::new(
        File::create(&cli.output)
            .with_context(|| format!("Failed to create output: {:?}", cli.output))?,
    );
    write_absorptions(&mut writer, num_faces, cli.coefficient)?;
    writer.flush()?;

    tracing::info!("Finished");
    Ok(())
}

/// Write one coefficient line per face.
fn write_absorptions<W: Write>(
    w: &mut W,
    num_faces: usize,
    coefficient: f64,
) -> std::io::Result<()> {
    let line = format_scientific(coefficient);
    for _ in 0..num_faces {
        writeln!(w, "{}", line)?;
    }
    Ok(())
}

/// Format a float the way the solver's fixed-format reader expects:
/// 15 fractional digits and a signed two-digit exponent (C's `%.15e`).
fn format_scientific(value: f64) -> String {
    let formatted = format!("{:.15e}", value);
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("+", exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}
