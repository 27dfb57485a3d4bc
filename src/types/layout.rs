use std::path::{Path, PathBuf};

use crate::constants::{BACKUPS_DIR, PAYLOAD_NAME, TARGET_DIR};

/// Fixed project layout the rollback operates on.
///
/// Every location is derived from `root` and the crate constants; there is no
/// way to override individual paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Default for Layout {
    /// Layout rooted at the current working directory.
    fn default() -> Self {
        Self::rooted(".")
    }
}

impl Layout {
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/backups`
    pub fn backups_dir(&self) -> PathBuf {
        self.root.join(BACKUPS_DIR)
    }

    /// Payload path inside a given backup directory.
    pub fn payload_in(&self, backup_dir: &Path) -> PathBuf {
        backup_dir.join(PAYLOAD_NAME)
    }

    /// `<root>/backend/analizador_optimizado.py`
    pub fn target(&self) -> PathBuf {
        self.root.join(TARGET_DIR).join(PAYLOAD_NAME)
    }
}
