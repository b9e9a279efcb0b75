// tests/fs_abstraction.rs

use std::path::Path;

use walkfiles::fs::mock::MockFileSystem;
use walkfiles::fs::{FileKind, FileSystem};

#[tokio::test]
async fn mock_fs_creates_parent_directories_implicitly() {
    let fs = MockFileSystem::new();
    fs.add_file("/root/a/b/file.txt", "data");

    assert_eq!(
        fs.read_dir(Path::new("/root")).await.unwrap(),
        vec!["a".to_string()]
    );
    assert_eq!(
        fs.read_dir(Path::new("/root/a/b")).await.unwrap(),
        vec!["file.txt".to_string()]
    );
    assert_eq!(
        fs.status(Path::new("/root/a")).await.unwrap(),
        FileKind::Directory
    );
    assert_eq!(
        fs.status(Path::new("/root/a/b/file.txt")).await.unwrap(),
        FileKind::File
    );
}

#[tokio::test]
async fn mock_fs_lists_names_in_sorted_order() {
    let fs = MockFileSystem::new();
    fs.add_file("/d/zeta.txt", "");
    fs.add_file("/d/alpha.txt", "");
    fs.add_file("/d/.dot", "");
    fs.add_file("/d/mid.txt", "");

    assert_eq!(
        fs.read_dir(Path::new("/d")).await.unwrap(),
        vec![".dot", "alpha.txt", "mid.txt", "zeta.txt"]
    );
}

#[tokio::test]
async fn mock_fs_errors_carry_the_os_message_shape() {
    let fs = MockFileSystem::new();
    fs.add_broken("/d/bad");
    fs.add_unreadable("/d/secret");

    let err = fs.status(Path::new("/d/bad")).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "ENOENT, no such file or directory, stat '/d/bad'"
    );

    let err = fs.read(Path::new("/d/secret")).await.unwrap_err();
    assert_eq!(err.to_string(), "EACCES, permission denied '/d/secret'");

    let err = fs.read_dir(Path::new("/missing")).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "ENOENT, no such file or directory '/missing'"
    );
}

#[tokio::test]
async fn mock_fs_reads_file_bytes() {
    let fs = MockFileSystem::new();
    fs.add_file("/d/file.bin", vec![0u8, 159, 146, 150]);

    assert_eq!(
        fs.read(Path::new("/d/file.bin")).await.unwrap(),
        vec![0u8, 159, 146, 150]
    );
}
