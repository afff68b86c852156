//! Error taxonomy for the pipeline.
//!
//! Variants stay coarse on purpose: the CLI maps each one to a distinct exit
//! code, and nothing in the pipeline is transient enough to retry. A dump
//! with no recognizable headers is *not* an error (it yields an empty graph),
//! and a unit with no extractable facts is a normal outcome.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input dump could not be read.
    #[error("cannot read input {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output artifact could not be written.
    ///
    /// Artifacts are written sequentially best-effort: files written before
    /// the failing one remain on disk.
    #[error("cannot write artifact {path}: {source}")]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dump text failed validation.
    #[error("parse error: {0}")]
    Parse(String),

    /// Graph assembly failed an internal invariant.
    #[error("graph build failed: {0}")]
    GraphBuild(String),
}

impl Error {
    /// Underlying I/O error kind, where one exists.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Error::FileAccess { source, .. } | Error::ArtifactWrite { source, .. } => {
                Some(source.kind())
            }
            _ => None,
        }
    }
}
