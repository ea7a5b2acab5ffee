//! Error types for the copy operation.
//!
//! Only [`CopyError::SourceRootNotFound`] and [`CopyError::ReadSourceRoot`]
//! escape [`crate::copier::Copier::copy`]; every other variant describes a
//! single item and is logged by the copier before it moves on.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("Shared directory not found: {}", .0.display())]
    SourceRootNotFound(PathBuf),
    #[error("Failed to read shared directory {}: {source}", .path.display())]
    ReadSourceRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("{0} is a directory and directories are disabled (files-only mode)")]
    UnsupportedDirectory(String),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read answer: {0}")]
    Prompt(#[source] io::Error),
}

impl CopyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CopyError::Io {
            path: path.into(),
            source,
        }
    }
}
