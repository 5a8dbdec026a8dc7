//! bem-export library
//!
//! Mesh loading and fixed-format `.dat` serialization for the BEM
//! preprocessing tools. The `bem-absorb` tool reuses the face-table
//! reader from here.

pub mod dat;
pub mod error;
pub mod mesh;
pub mod resolve;

pub use error::{ExportError, Result};
pub use mesh::{load_mesh, Mesh, MeshFormat};
