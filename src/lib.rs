// src/lib.rs

//! Recursive directory traversal with glob filters and per-file
//! notifications.
//!
//! [`traverse`] walks a tree depth-first in pre-order and returns the
//! ordered list of matched paths; [`traverse_with`] additionally delivers a
//! notification per file (with its decoded content) and lets the handler
//! suspend the walk by returning [`Flow::Defer`]. I/O goes through the
//! [`fs::FileSystem`] trait; [`RealFileSystem`] is the `tokio::fs` backed
//! implementation and [`fs::mock::MockFileSystem`] an in-memory one for
//! tests.
//!
//! ```no_run
//! use std::path::Path;
//! use walkfiles::{RealFileSystem, WalkOptions, traverse};
//!
//! #[tokio::main]
//! async fn main() -> walkfiles::Result<()> {
//!     let options = WalkOptions::filtered(["**/*.txt"]);
//!     let files = traverse(&RealFileSystem, Path::new("docs"), &options).await?;
//!     for file in files {
//!         println!("{file}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod filter;
pub mod fs;
pub mod logging;
pub mod options;
pub mod walker;

pub use errors::{Result, WalkError};
pub use fs::{FileKind, FileSystem, RealFileSystem};
pub use options::{Encoding, FilenameFormat, WalkOptions};
pub use walker::{Deferred, FileContent, FileVisit, Flow, traverse, traverse_with};
