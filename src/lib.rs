#![forbid(unsafe_code)]
//! Rollback helper: restore `backend/analizador_optimizado.py` from the most
//! recently modified directory under `backups/`.
//!
//! Pipeline: locate the newest backup directory by mtime, refuse to act when
//! none exists, then copy the payload over the target with a single
//! synchronous copy.

pub mod constants;
pub mod api;
pub mod fs;
pub mod logging;
pub mod types;

pub use api::*;
