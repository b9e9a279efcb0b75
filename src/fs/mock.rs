// src/fs/mock.rs

//! In-memory [`FileSystem`] used by tests.
//!
//! Besides plain files and directories the mock can hold deliberately
//! broken entries, so error paths (stat failures, unreadable files,
//! unlistable directories) can be exercised without touching the real
//! filesystem. Error messages follow the OS shape (`ENOENT, ...`).

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::{FileKind, FileSystem};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(Vec<u8>),
    /// Directory with a list of child names.
    Dir(Vec<String>),
    /// Listed by its parent, but stat fails with ENOENT.
    Broken,
    /// Stats as a regular file, but reading it fails with EACCES.
    Unreadable,
    /// Directory whose listing fails with EACCES.
    DeniedDir,
    /// Neither file nor directory (socket, fifo, ...).
    Special,
}

#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    entries: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        self.insert(path.as_ref(), MockEntry::File(content.into()));
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut entries = self.entries.lock().unwrap();
        Self::ensure_dir_entry(&mut entries, path);
    }

    pub fn add_broken(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), MockEntry::Broken);
    }

    pub fn add_unreadable(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), MockEntry::Unreadable);
    }

    pub fn add_denied_dir(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), MockEntry::DeniedDir);
    }

    pub fn add_special(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), MockEntry::Special);
    }

    fn insert(&self, path: &Path, entry: MockEntry) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(path.to_path_buf(), entry);

        if let Some(parent) = path.parent() {
            let parent = Self::normalize_parent(parent);
            Self::ensure_dir_entry(&mut entries, &parent);
            Self::register_child(&mut entries, &parent, path);
        }
    }

    /// Create the directory (and all its ancestors) if missing.
    fn ensure_dir_entry(entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        if entries.contains_key(path) {
            return;
        }
        entries.insert(path.to_path_buf(), MockEntry::Dir(Vec::new()));

        if let Some(parent) = path.parent() {
            let parent = Self::normalize_parent(parent);
            if parent != path {
                Self::ensure_dir_entry(entries, &parent);
                Self::register_child(entries, &parent, path);
            }
        }
    }

    fn register_child(entries: &mut HashMap<PathBuf, MockEntry>, parent: &Path, child: &Path) {
        let Some(name) = child.file_name().and_then(|n| n.to_str()) else {
            return;
        };
        if let Some(MockEntry::Dir(children)) = entries.get_mut(parent) {
            if !children.iter().any(|c| c == name) {
                children.push(name.to_string());
            }
        }
    }

    fn normalize_parent(parent: &Path) -> PathBuf {
        if parent.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            parent.to_path_buf()
        }
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("ENOENT, no such file or directory '{}'", path.display()),
    )
}

fn stat_not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("ENOENT, no such file or directory, stat '{}'", path.display()),
    )
}

fn permission_denied(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("EACCES, permission denied '{}'", path.display()),
    )
}

impl FileSystem for MockFileSystem {
    async fn read_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let entries = self.entries.lock().unwrap();
        match entries.get(path) {
            Some(MockEntry::Dir(children)) => {
                // Listing-order contract: sorted names.
                let mut names = children.clone();
                names.sort();
                Ok(names)
            }
            Some(MockEntry::DeniedDir) => Err(permission_denied(path)),
            Some(_) => Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("ENOTDIR, not a directory '{}'", path.display()),
            )),
            None => Err(not_found(path)),
        }
    }

    async fn status(&self, path: &Path) -> io::Result<FileKind> {
        let entries = self.entries.lock().unwrap();
        match entries.get(path) {
            Some(MockEntry::File(_)) | Some(MockEntry::Unreadable) => Ok(FileKind::File),
            Some(MockEntry::Dir(_)) | Some(MockEntry::DeniedDir) => Ok(FileKind::Directory),
            Some(MockEntry::Special) => Ok(FileKind::Other),
            Some(MockEntry::Broken) | None => Err(stat_not_found(path)),
        }
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let entries = self.entries.lock().unwrap();
        match entries.get(path) {
            Some(MockEntry::File(content)) => Ok(content.clone()),
            Some(MockEntry::Unreadable) => Err(permission_denied(path)),
            Some(MockEntry::Dir(_)) | Some(MockEntry::DeniedDir) => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!(
                    "EISDIR, illegal operation on a directory, read '{}'",
                    path.display()
                ),
            )),
            _ => Err(not_found(path)),
        }
    }
}
