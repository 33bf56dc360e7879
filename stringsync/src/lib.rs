#![forbid(unsafe_code)]
//! Keeps Windows and Linux plug-in string tables in sync with the macOS
//! `.strings` source of truth.
//!
//! The macOS file is the master table. One run reads it into a [`StringTable`],
//! rewrites the matching string-table lines of the Windows resource script in
//! place (UTF-16LE, stale entries removed), and regenerates the Linux
//! function-strings header from scratch with the plug-in version baked in.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stringsync::{ProjectPaths, sync_project};
//!
//! let paths = ProjectPaths::discover("path/to/plugin-project")?;
//! let summary = sync_project(&paths, false)?;
//! println!("{} functions synced", summary.functions);
//! # Ok::<(), stringsync::Error>(())
//! ```
//!
//! # The three formats
//!
//! - **macOS `.strings`** ([`formats::strings`]): read-only input, one record
//!   per `"id" = "signature | keywords | description";` line.
//! - **Windows `.rc`** ([`formats::rc`]): updated in place, preserving every
//!   line that is not a string-table entry.
//! - **Linux header** ([`formats::linux_header`]): fully regenerated
//!   `std::map` initializer, included directly by downstream C++ code.

pub mod error;
pub mod formats;
pub mod project;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    project::{ProjectPaths, SyncSummary, sync_project},
    traits::Parser,
    types::{FunctionString, IdToken, StringTable},
};
