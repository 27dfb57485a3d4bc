//! Restore subsystem: copy the payload of a selected backup over the target.

pub mod engine;

pub use engine::restore_payload;
