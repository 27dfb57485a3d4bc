//! Shared crate-wide constants for the rollback helper.
//!
//! Centralizes the well-known paths and the restart hint. `types::Layout`
//! derives every filesystem location from these.

/// Directory, relative to the project root, whose subdirectories are backups.
pub const BACKUPS_DIR: &str = "backups";

/// File restored from the selected backup directory.
pub const PAYLOAD_NAME: &str = "analizador_optimizado.py";

/// Directory, relative to the project root, that receives the payload.
pub const TARGET_DIR: &str = "backend";

/// Command shown to the developer to restart the Streamlit frontend.
pub const RESTART_COMMAND: &str = "streamlit run frontend/app.py";

/// Version of the JSON envelope attached to every emitted fact.
pub const SCHEMA_VERSION: i64 = 1;
