// src/errors.rs

//! Crate-wide error type and `Result` alias.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by a traversal.
///
/// The `source` of the I/O variants is the untouched [`std::io::Error`] from
/// the filesystem provider, so OS-style messages (`ENOENT, ...`) reach the
/// caller verbatim.
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("failed to list directory '{}': {source}", .path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to stat '{}': {source}", .path.display())]
    Status {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl WalkError {
    /// Path of the entry this error concerns, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            WalkError::Listing { path, .. }
            | WalkError::Status { path, .. }
            | WalkError::Read { path, .. } => Some(path),
            WalkError::Pattern(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WalkError>;
