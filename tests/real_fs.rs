// tests/real_fs.rs

//! End-to-end coverage against the real filesystem via `tempfile`.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use walkfiles::{RealFileSystem, WalkError, WalkOptions, traverse, traverse_with};
use walkfiles_test_utils::{init_tracing, recorder::Recorder};

fn sample_tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("a.txt"), "A").unwrap();
    fs::write(root.join("b.dat"), "B").unwrap();
    fs::write(root.join(".hide"), "H").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("c.txt"), "C").unwrap();
    dir
}

#[tokio::test]
async fn walks_a_real_tree_in_sorted_order() {
    init_tracing();
    let dir = sample_tree();
    let mut recorder = Recorder::new();

    let files = traverse_with(
        &RealFileSystem,
        dir.path(),
        &WalkOptions::default(),
        &mut |v| recorder.record(v),
    )
    .await
    .unwrap();

    assert_eq!(files, vec!["a.txt", "b.dat", "sub/c.txt"]);
    assert_eq!(recorder.texts(), vec!["A", "B", "C"]);
}

#[tokio::test]
async fn hidden_and_depth_apply_on_the_real_filesystem() {
    let dir = sample_tree();

    let hidden = WalkOptions {
        hidden: true,
        ..WalkOptions::default()
    };
    let files = traverse(&RealFileSystem, dir.path(), &hidden).await.unwrap();
    assert_eq!(files, vec![".hide", "a.txt", "b.dat", "sub/c.txt"]);

    let shallow = WalkOptions {
        depth: Some(0),
        ..WalkOptions::default()
    };
    let files = traverse(&RealFileSystem, dir.path(), &shallow).await.unwrap();
    assert_eq!(files, vec!["a.txt", "b.dat"]);
}

#[tokio::test]
async fn filters_apply_on_the_real_filesystem() {
    let dir = sample_tree();

    let files = traverse(
        &RealFileSystem,
        dir.path(),
        &WalkOptions::filtered(["**/*.txt"]),
    )
    .await
    .unwrap();
    assert_eq!(files, vec!["a.txt", "sub/c.txt"]);
}

#[tokio::test]
async fn full_path_format_reports_paths_under_the_root() {
    let dir = sample_tree();
    let options = WalkOptions {
        filename_format: walkfiles::FilenameFormat::FullPath,
        ..WalkOptions::default()
    };

    let files = traverse(&RealFileSystem, dir.path(), &options).await.unwrap();

    assert_eq!(files.len(), 3);
    for file in &files {
        assert!(Path::new(file).starts_with(dir.path()));
    }
}

#[tokio::test]
async fn missing_root_surfaces_the_os_error() {
    let dir = sample_tree();
    let missing = dir.path().join("nope");

    let err = traverse(&RealFileSystem, &missing, &WalkOptions::default())
        .await
        .unwrap_err();

    match err {
        WalkError::Listing { ref path, ref source } => {
            assert_eq!(path, &missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Listing error, got: {other:?}"),
    }
}
