use std::io::ErrorKind as IoKind;
use std::path::Path;

use log::debug;

use crate::types::errors::{Error, ErrorKind, Result};

/// Copy the backup payload at `source` over `target` with a single `std::fs::copy`.
///
/// Not transactional: an interrupted copy may leave `target` partially written.
/// A missing `source` fails before `target` is opened, so the target is left as is.
///
/// # Errors
///
/// `ErrorKind::PayloadMissing` when `source` does not exist as a file,
/// `ErrorKind::Io` for any other copy failure. The IO error is kept as the source.
pub fn restore_payload(source: &Path, target: &Path) -> Result<u64> {
    debug!("copy {} -> {}", source.display(), target.display());
    std::fs::copy(source, target).map_err(|e| {
        let kind = if e.kind() == IoKind::NotFound && !source.is_file() {
            ErrorKind::PayloadMissing
        } else {
            ErrorKind::Io
        };
        let path = if kind == ErrorKind::PayloadMissing {
            source
        } else {
            target
        };
        Error::new(kind, path, e)
    })
}
