use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can abort a transform.
///
/// Nothing is retried or recovered. The first error bubbles up to the CLI,
/// which prints it and exits non-zero.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot find {}", .0.display())]
    NotFound(PathBuf),

    #[error("{} should be a document or a directory", .0.display())]
    InvalidInput(PathBuf),

    #[error("Malformed document: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0:?} is not a valid top-level file name")]
    InvalidFileName(String),

    #[error("Could not determine working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to write log output: {0}")]
    Log(#[from] std::io::Error),
}

impl Error {
    pub fn read(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Read { path, source }
    }

    pub fn write(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Write { path, source }
    }
}
