// Facade for the rollback pipeline; delegates to fs/ and logging/.

use std::io::Write;

use log::{error, info, warn};
use serde_json::json;

use crate::fs::{list_backup_dirs, mtime_secs, restore_payload, sha256_hex_of};
use crate::logging::{FactsEmitter, StageLogger};
use crate::types::{BackupDir, Layout, RestoreReport};

pub mod console;
pub mod errors;

pub use errors::{exit_code_for, id_str, ApiError, ErrorId};

pub struct Rollback<E: FactsEmitter> {
    facts: E,
    layout: Layout,
}

impl<E: FactsEmitter> Rollback<E> {
    pub fn new(facts: E, layout: Layout) -> Self {
        Self { facts, layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Pick the most recently modified directory under `backups/`.
    ///
    /// # Errors
    ///
    /// `ApiError::BackupMissing` when `backups/` is absent or holds no directories.
    pub fn locate(&self) -> Result<BackupDir, ApiError> {
        let dir = self.layout.backups_dir();
        let candidates = list_backup_dirs(&dir);
        let slog = StageLogger::new(&self.facts);
        match candidates.first() {
            Some(b) => {
                info!("selected backup {} of {}", b.name, candidates.len());
                slog.locate()
                    .path(dir.display().to_string())
                    .merge(json!({
                        "candidates": candidates.len(),
                        "backup": b.name,
                        "backup_mtime": mtime_secs(b.modified),
                    }))
                    .emit_success();
                Ok(b.clone())
            }
            None => {
                let err = ApiError::BackupMissing { dir: dir.clone() };
                warn!("{err}");
                slog.locate()
                    .path(dir.display().to_string())
                    .merge(json!({
                        "candidates": 0,
                        "error_id": id_str(err.id()),
                        "exit_code": err.exit_code(),
                    }))
                    .emit_failure();
                Err(err)
            }
        }
    }

    /// Copy the payload of `backup` over the restore target.
    ///
    /// # Errors
    ///
    /// `ApiError::PayloadMissing` when the backup lacks the payload file,
    /// `ApiError::RestoreFailed` for any other copy failure.
    pub fn restore_from(&self, backup: &BackupDir) -> Result<RestoreReport, ApiError> {
        let source = self.layout.payload_in(&backup.path);
        let target = self.layout.target();
        let slog = StageLogger::new(&self.facts);
        let base = json!({
            "backup": backup.name,
            "source": source.display().to_string(),
        });
        match restore_payload(&source, &target) {
            Ok(bytes) => {
                let after_hash = sha256_hex_of(&target);
                info!("restored {} bytes into {}", bytes, target.display());
                slog.restore_result()
                    .path(target.display().to_string())
                    .merge(base)
                    .merge(json!({ "bytes": bytes, "after_hash": after_hash }))
                    .emit_success();
                Ok(RestoreReport {
                    backup: backup.clone(),
                    source,
                    target,
                    bytes,
                    after_hash,
                })
            }
            Err(e) => {
                let err = ApiError::from(e);
                error!("{err}");
                slog.restore_result()
                    .path(target.display().to_string())
                    .merge(base)
                    .merge(json!({
                        "error": err.to_string(),
                        "error_id": id_str(err.id()),
                        "exit_code": err.exit_code(),
                    }))
                    .emit_failure();
                Err(err)
            }
        }
    }

    /// Full rollback with status lines written to `out`, flushed before returning.
    ///
    /// # Errors
    ///
    /// Propagates `locate` and `restore_from` failures, and write failures on `out`.
    pub fn run(&self, out: &mut dyn Write) -> Result<RestoreReport, ApiError> {
        console::start(out)?;
        let backup = match self.locate() {
            Ok(b) => b,
            Err(e) => {
                console::no_backup(out)?;
                if let Err(fe) = out.flush() {
                    warn!("stdout flush failed: {fe}");
                }
                return Err(e);
            }
        };
        console::using(out, &backup.name)?;
        let report = self.restore_from(&backup)?;
        console::done(out)?;
        out.flush()?;
        Ok(report)
    }
}
