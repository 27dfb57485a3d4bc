use std::path::PathBuf;
use std::time::SystemTime;

use serde::Serialize;

/// A candidate directory found directly under `backups/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BackupDir {
    pub name: String,
    pub path: PathBuf,
    #[serde(skip)]
    pub modified: SystemTime,
}

/// Outcome of a successful restore.
#[derive(Clone, Debug, Serialize)]
pub struct RestoreReport {
    pub backup: BackupDir,
    pub source: PathBuf,
    pub target: PathBuf,
    pub bytes: u64,
    /// SHA-256 of the target after the copy; `None` when it could not be read back.
    pub after_hash: Option<String>,
}
