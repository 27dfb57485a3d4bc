//! Backup discovery: which directories under `backups/` exist and which is newest.

pub mod index;

pub use index::*;
