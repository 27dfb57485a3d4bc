use std::cmp::Ordering;
use std::path::Path;

use log::{debug, warn};

use crate::types::BackupDir;

/// List the backup directories directly under `backups_dir`, newest first.
///
/// Only directories count (symlinks are followed); hidden entries are skipped.
/// A missing or unreadable `backups_dir` yields an empty list. Entries sharing
/// an mtime are ordered by name, descending.
pub fn list_backup_dirs(backups_dir: &Path) -> Vec<BackupDir> {
    let rd = match std::fs::read_dir(backups_dir) {
        Ok(rd) => rd,
        Err(e) => {
            debug!("cannot list {}: {e}", backups_dir.display());
            return Vec::new();
        }
    };
    let mut out: Vec<BackupDir> = Vec::new();
    for e in rd.flatten() {
        let name = e.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let path = e.path();
        let md = match std::fs::metadata(&path) {
            Ok(md) => md,
            Err(err) => {
                warn!("skipping {}: {err}", path.display());
                continue;
            }
        };
        if !md.is_dir() {
            continue;
        }
        let modified = match md.modified() {
            Ok(t) => t,
            Err(err) => {
                warn!("skipping {}: mtime unavailable: {err}", path.display());
                continue;
            }
        };
        out.push(BackupDir {
            name,
            path,
            modified,
        });
    }
    out.sort_by(newest_first);
    out
}

fn newest_first(a: &BackupDir, b: &BackupDir) -> Ordering {
    b.modified
        .cmp(&a.modified)
        .then_with(|| b.name.cmp(&a.name))
}
