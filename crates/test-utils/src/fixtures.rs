#![allow(dead_code)]

//! Canned in-memory directory trees shared across the integration tests.

use walkfiles::fs::mock::MockFileSystem;

/// Root directory all fixture trees are built under.
pub const ROOT: &str = "/path/to/dir";

/// A single directory with four files.
pub fn flat_tree() -> MockFileSystem {
    let fs = MockFileSystem::new();
    fs.add_file(format!("{ROOT}/abc.txt"), "ABC");
    fs.add_file(format!("{ROOT}/def.dat"), "DEF");
    fs.add_file(format!("{ROOT}/test123.txt"), "123");
    fs.add_file(format!("{ROOT}/test456.dat"), "456");
    fs
}

/// Three levels of nesting with dotfiles at every level.
pub fn deep_tree() -> MockFileSystem {
    let fs = MockFileSystem::new();
    fs.add_file(format!("{ROOT}/.system"), "SYSTEM");
    fs.add_file(format!("{ROOT}/def.dat"), "DEF");
    fs.add_file(format!("{ROOT}/abc.txt"), "ABC");
    fs.add_file(format!("{ROOT}/abc123.txt"), "ABC123");
    fs.add_file(format!("{ROOT}/subdir/.dot"), "DOT");
    fs.add_file(format!("{ROOT}/subdir/test456.dat"), "456");
    fs.add_file(format!("{ROOT}/subdir/test789.txt"), "789");
    fs.add_file(format!("{ROOT}/subdir/test123.txt"), "123");
    fs.add_file(format!("{ROOT}/subdir/abc123.txt"), "ABC123");
    fs.add_file(format!("{ROOT}/subdir/subsubdir/.hidden"), "HIDDEN");
    fs.add_file(format!("{ROOT}/subdir/subsubdir/abc123.dat"), "ABC123");
    fs.add_file(format!("{ROOT}/subdir/subsubdir/def456.dat"), "456");
    fs.add_file(format!("{ROOT}/otherdir/.other"), "DOT");
    fs.add_file(format!("{ROOT}/otherdir/test789.txt"), "789");
    fs.add_file(format!("{ROOT}/otherdir/test123.txt"), "123");
    fs.add_file(format!("{ROOT}/otherdir/subsubdir/.hidden"), "HIDDEN");
    fs.add_file(format!("{ROOT}/otherdir/subsubdir/abc123.txt"), "ABC123");
    fs.add_file(format!("{ROOT}/otherdir/subsubdir/def456.txt"), "456");
    fs
}

/// [`deep_tree`] plus one stat-failing entry in each of `subdir` and
/// `otherdir`.
pub fn broken_deep_tree() -> MockFileSystem {
    let fs = deep_tree();
    fs.add_broken(format!("{ROOT}/subdir/error-file.dat"));
    fs.add_broken(format!("{ROOT}/otherdir/error-file.dat"));
    fs
}
