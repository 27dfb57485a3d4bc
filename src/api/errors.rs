use std::path::PathBuf;

use thiserror::Error;

use crate::types::errors::{Error as FsError, ErrorKind};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no backup directory found under {}", dir.display())]
    BackupMissing { dir: PathBuf },
    #[error("backup payload missing: {}: {source}", path.display())]
    PayloadMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("restore failed: {}: {source}", path.display())]
    RestoreFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("console write failed: {0}")]
    Console(#[from] std::io::Error),
}

impl ApiError {
    #[must_use]
    pub fn id(&self) -> ErrorId {
        match self {
            ApiError::BackupMissing { .. } => ErrorId::E_BACKUP_MISSING,
            ApiError::PayloadMissing { .. } => ErrorId::E_PAYLOAD_MISSING,
            ApiError::RestoreFailed { .. } => ErrorId::E_RESTORE_FAILED,
            ApiError::Console(_) => ErrorId::E_GENERIC,
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        exit_code_for(self.id())
    }
}

impl From<FsError> for ApiError {
    fn from(e: FsError) -> Self {
        match e.kind {
            ErrorKind::PayloadMissing => ApiError::PayloadMissing {
                path: e.path,
                source: e.source,
            },
            ErrorKind::Io => ApiError::RestoreFailed {
                path: e.path,
                source: e.source,
            },
        }
    }
}

// Stable identifiers emitted in facts; SCREAMING_SNAKE_CASE matches the emitted form.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorId {
    E_BACKUP_MISSING,
    E_PAYLOAD_MISSING,
    E_RESTORE_FAILED,
    E_GENERIC,
}

#[must_use]
pub const fn id_str(id: ErrorId) -> &'static str {
    match id {
        ErrorId::E_BACKUP_MISSING => "E_BACKUP_MISSING",
        ErrorId::E_PAYLOAD_MISSING => "E_PAYLOAD_MISSING",
        ErrorId::E_RESTORE_FAILED => "E_RESTORE_FAILED",
        ErrorId::E_GENERIC => "E_GENERIC",
    }
}

#[must_use]
pub const fn exit_code_for(id: ErrorId) -> i32 {
    match id {
        ErrorId::E_BACKUP_MISSING => 1,
        ErrorId::E_PAYLOAD_MISSING => 2,
        ErrorId::E_RESTORE_FAILED => 3,
        ErrorId::E_GENERIC => 1,
    }
}
