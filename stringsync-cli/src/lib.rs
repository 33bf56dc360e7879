//! CLI library for testing purposes

pub mod sync;
pub mod validation;
pub mod view;

pub use sync::{SyncOptions, run_sync_command};
