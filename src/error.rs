//! Error types for report generation

use std::io;
use std::path::PathBuf;

/// Fatal failures. Per-file size lookups never surface here; they degrade to `[?]`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot read directory '{}': {source}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot create '{}': {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing output: {0}")]
    Write(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
