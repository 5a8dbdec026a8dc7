//! Error types for the BEM preprocessing tools
//!
//! Loader failures are mapped into a closed set of error kinds instead of
//! being classified by message text. Anything a format library reports that
//! does not fit a known category is carried through in `Parse` with the
//! library's own message intact.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Error, Debug)]
pub enum ExportError {
    /// The requested mesh file does not exist on disk.
    #[error("mesh file {path:?} was not found")]
    FileNotFound { path: PathBuf },

    /// The file extension is not one of the recognized mesh formats.
    #[error("file {path:?} was not of any known mesh type")]
    UnknownFormat { path: PathBuf },

    /// The loader reported success but produced no vertices.
    #[error("file {path:?} contained an empty or misformatted mesh")]
    EmptyMesh { path: PathBuf },

    /// A format library rejected the file for some other reason.
    #[error("failed to parse mesh {path:?}: {details}")]
    Parse { path: PathBuf, details: String },

    /// The first line of a face table was not an integer count.
    #[error("first line of {path:?} should be the number of mesh faces")]
    MalformedCount {
        path: PathBuf,
        #[source]
        source: ParseIntError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
