//! bem-export - BEM mesh export tool
//!
//! Converts a 3D surface mesh (.ply/.stl/.off/.obj) into the fixed-format
//! Faces.dat and Vertices.dat tables consumed by the acoustics solver.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use bem_export::resolve::{self, Resolution};
use bem_export::{dat, mesh};

#[derive(Parser)]
#[command(name = "bem-export")]
#[command(about = "Export a surface mesh to Faces.dat and Vertices.dat for the BEM solver")]
#[command(version)]
struct Cli {
    /// Path to mesh file to read
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output path for the face table
    #[arg(long, default_value = "Faces.dat")]
    faces: PathBuf,

    /// Output path for the vertex table
    #[arg(long, default_value = "Vertices.dat")]
    vertices: PathBuf,
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

    let cwd = std::env::current_dir()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let filename = match resolve::resolve_mesh_file(
        cli.file.as_deref(),
        &cwd,
        &mut input,
        &mut output,
    )? {
        Resolution::File(path) => path,
        Resolution::Quit => return Ok(()),
    };

    tracing::info!("Reading mesh from {:?}", filename);
    let mesh = mesh::load_mesh(&filename)?;

    tracing::info!("Writing mesh to {:?} and {:?}", cli.faces, cli.vertices);
    dat::write_dat_files(&mesh, &cli.faces, &cli.vertices)?;

    tracing::info!(
        "Exported {} faces and {} vertices",
        mesh.face_count(),
        mesh.vertex_count()
    );

    Ok(())
}
