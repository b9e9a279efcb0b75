// src/fs/mod.rs

use std::fmt::Debug;
use std::io;
use std::path::Path;

pub mod mock;

/// Filesystem status of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Directory,
    File,
    /// Anything that is neither a regular file nor a directory
    /// (sockets, fifos, ...). The walker skips these silently.
    Other,
}

/// Abstract filesystem interface the walker reads through.
///
/// Contract:
/// - `read_dir` returns entry *names* (not paths) in listing order, which
///   the provider must keep sorted; the walker relies on that order and does
///   not re-sort.
/// - Errors are plain [`std::io::Error`] values so OS-style messages
///   (`ENOENT`, ...) are surfaced verbatim.
#[allow(async_fn_in_trait)]
pub trait FileSystem: Debug {
    async fn read_dir(&self, path: &Path) -> io::Result<Vec<String>>;
    async fn status(&self, path: &Path) -> io::Result<FileKind>;
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Implementation that uses `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    async fn read_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut reader = tokio::fs::read_dir(path).await?;
        let mut names = Vec::new();
        while let Some(entry) = reader.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        // The OS yields entries in arbitrary order; the walker's listing
        // order contract is sorted names.
        names.sort();
        Ok(names)
    }

    async fn status(&self, path: &Path) -> io::Result<FileKind> {
        let meta = tokio::fs::metadata(path).await?;
        Ok(if meta.is_dir() {
            FileKind::Directory
        } else if meta.is_file() {
            FileKind::File
        } else {
            FileKind::Other
        })
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}
