pub mod errors;
pub mod layout;
pub mod report;

pub use errors::{Error, ErrorKind};
pub use layout::Layout;
pub use report::{BackupDir, RestoreReport};
