//! All error types for the stringsync crate.
//!
//! These are returned from all fallible operations (parsing, generation, file I/O).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no VERSION_STRING definition found in `{path}`")]
    VersionNotFound { path: String },

    #[error("no .strings file found under `{0}`")]
    NoStringsFile(String),

    #[error("multiple .strings files under `{dir}`: {candidates:?}; pass an explicit plugin name")]
    AmbiguousStringsFile { dir: String, candidates: Vec<String> },

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl Error {
    /// Creates a version-lookup failure for the given header path.
    pub fn version_not_found(path: impl Into<String>) -> Self {
        Error::VersionNotFound { path: path.into() }
    }
}
