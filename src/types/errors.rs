//! Error types used by the filesystem layer.
use std::path::PathBuf;

use thiserror::Error;

/// High-level error categories for filesystem probes and copies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("payload missing")]
    PayloadMissing,
    #[error("io error")]
    Io,
}

/// Structured error with a kind, the path involved and the underlying IO cause.
#[derive(Debug, Error)]
#[error("{kind}: {}: {source}", path.display())]
pub struct Error {
    pub kind: ErrorKind,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl Error {
    pub fn new(kind: ErrorKind, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            kind,
            path: path.into(),
            source,
        }
    }
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;
