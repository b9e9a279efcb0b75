// tests/walk_defaults.rs

use std::path::Path;
use std::time::Duration;

use walkfiles::fs::mock::MockFileSystem;
use walkfiles::{FileVisit, Flow, WalkError, WalkOptions, traverse, traverse_with};
use walkfiles_test_utils::fixtures::{ROOT, flat_tree};
use walkfiles_test_utils::{init_tracing, recorder::Recorder};

#[tokio::test]
async fn returns_files_and_contents_in_listing_order() {
    init_tracing();
    let fs = flat_tree();
    let mut recorder = Recorder::new();

    let files = traverse_with(&fs, Path::new(ROOT), &WalkOptions::default(), &mut |v| {
        recorder.record(v)
    })
    .await
    .unwrap();

    assert_eq!(files, vec!["abc.txt", "def.dat", "test123.txt", "test456.dat"]);
    assert_eq!(
        recorder.names(),
        vec!["abc.txt", "def.dat", "test123.txt", "test456.dat"]
    );
    assert_eq!(recorder.texts(), vec!["ABC", "DEF", "123", "456"]);
    assert_eq!(recorder.error_count(), 0);
}

#[tokio::test]
async fn resolves_with_the_full_list_without_a_handler() {
    let fs = flat_tree();

    let files = traverse(&fs, Path::new(ROOT), &WalkOptions::default())
        .await
        .unwrap();

    assert_eq!(files.len(), 4);
}

#[tokio::test]
async fn missing_root_fails_with_a_listing_error() {
    let fs = MockFileSystem::new();

    let err = traverse(&fs, Path::new("/fake/invalid/dir"), &WalkOptions::default())
        .await
        .unwrap_err();

    match err {
        WalkError::Listing { ref path, .. } => {
            assert_eq!(path, Path::new("/fake/invalid/dir"));
        }
        other => panic!("expected Listing error, got: {other:?}"),
    }
    assert!(err.to_string().contains("ENOENT"));
}

#[tokio::test]
async fn awaits_a_deferred_continuation_before_the_next_entry() {
    let fs = flat_tree();
    let mut seen: Vec<String> = Vec::new();

    let files = traverse_with(
        &fs,
        Path::new(ROOT),
        &WalkOptions::default(),
        &mut |v: FileVisit<'_>| {
            seen.push(v.name.to_string());
            Flow::Defer(Box::pin(tokio::time::sleep(Duration::from_millis(5))))
        },
    )
    .await
    .unwrap();

    // Every notification completed (including its continuation) before the
    // next entry was started, so the orders agree exactly.
    assert_eq!(files, seen);
    assert_eq!(files, vec!["abc.txt", "def.dat", "test123.txt", "test456.dat"]);
}

#[tokio::test]
async fn non_regular_entries_are_silently_skipped() {
    let fs = flat_tree();
    fs.add_special(format!("{ROOT}/socket"));
    let mut recorder = Recorder::new();

    let files = traverse_with(&fs, Path::new(ROOT), &WalkOptions::default(), &mut |v| {
        recorder.record(v)
    })
    .await
    .unwrap();

    assert_eq!(files.len(), 4);
    assert!(!files.iter().any(|f| f == "socket"));
    assert_eq!(recorder.error_count(), 0);
}
