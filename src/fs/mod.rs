pub mod backup;
pub mod meta;
pub mod restore;

pub use backup::list_backup_dirs;
pub use meta::{mtime_secs, sha256_hex_of};
pub use restore::restore_payload;
