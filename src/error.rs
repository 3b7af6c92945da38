use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("path {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl TreeError {
    /// Classify an I/O failure on `path`, keeping missing paths distinct.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            TreeError::NotFound(path)
        } else {
            TreeError::Io { path, source }
        }
    }
}

pub type Result<T, E = TreeError> = std::result::Result<T, E>;
