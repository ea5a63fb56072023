//! Error types for reading universes and parsing the command line.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no file name provided")]
    MissingPath,

    #[error("{} does not exist, please provide a valid file name", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("universe must have at least one row and one column")]
    EmptyUniverse,

    #[error("row on line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}
