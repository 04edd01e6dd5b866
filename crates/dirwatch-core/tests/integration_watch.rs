//! Integration tests for the dirwatch poll loop end-to-end.

use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

use dirwatch_core::{DirectoryWatcher, ShutdownFlag, WatchConfig, WatchError};

fn config(dir: &Path, magic: &str) -> WatchConfig {
    WatchConfig {
        directory: dir.to_path_buf(),
        magic: magic.to_string(),
        extension: ".txt".to_string(),
        poll_interval: Duration::from_millis(50),
    }
}

/// Scenario: a.txt contains the magic phrase on its second line.
#[test]
fn test_single_match_at_line_two() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "hello\nmagic-phrase\n").unwrap();

    let mut watcher =
        DirectoryWatcher::new(config(dir.path(), "magic-phrase"), ShutdownFlag::new());
    let report = watcher.poll_once().unwrap();

    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].file, "a.txt");
    assert_eq!(report.matches[0].line_number, 2);
}

/// Scenario: empty directory produces no events and an empty watch-set.
#[test]
fn test_empty_directory_stays_quiet() {
    let dir = tempdir().unwrap();

    let mut watcher = DirectoryWatcher::new(config(dir.path(), "x"), ShutdownFlag::new());
    let report = watcher.poll_once().unwrap();

    assert!(report.is_empty());
    assert!(watcher.tracked_files().is_empty());
}

/// Scenario: a fully scanned file is deleted; the next cycle emits exactly
/// one removal and forgets the file.
#[test]
fn test_deleted_file_removed_next_cycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("b.txt");
    std::fs::write(&path, "one\ntwo\nthree\n").unwrap();

    let mut watcher = DirectoryWatcher::new(config(dir.path(), "zzz"), ShutdownFlag::new());
    watcher.poll_once().unwrap();
    assert_eq!(watcher.offset("b.txt"), Some(3));

    std::fs::remove_file(&path).unwrap();
    let report = watcher.poll_once().unwrap();

    assert_eq!(report.removed, vec!["b.txt"]);
    assert!(report.discovered.is_empty());
    assert!(watcher.tracked_files().is_empty());
}

/// Scenario: the watch directory does not exist; the error is recoverable,
/// not a panic or process exit.
#[test]
fn test_missing_directory_reports_unavailable() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("vanished");

    let mut watcher = DirectoryWatcher::new(config(&missing, "x"), ShutdownFlag::new());
    let err = watcher.poll_once().unwrap_err();

    assert!(matches!(err, WatchError::DirectoryUnavailable { .. }));
}

/// The run loop observes the shutdown flag between cycles and returns Ok.
#[tokio::test(start_paused = true)]
async fn test_run_loop_stops_on_shutdown() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "magic\n").unwrap();

    let shutdown = ShutdownFlag::new();
    let mut watcher = DirectoryWatcher::new(config(dir.path(), "magic"), shutdown.clone());

    let handle = tokio::spawn(async move { watcher.run().await });

    // Let a few cycles elapse before requesting shutdown
    tokio::time::sleep(Duration::from_millis(200)).await;
    shutdown.trigger();

    let result = handle.await.unwrap();
    assert!(result.is_ok());
}

/// The run loop surfaces a listing failure instead of spinning on it.
#[tokio::test(start_paused = true)]
async fn test_run_loop_propagates_directory_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("vanished");

    let mut watcher = DirectoryWatcher::new(config(&missing, "x"), ShutdownFlag::new());
    let result = watcher.run().await;

    assert!(matches!(
        result,
        Err(WatchError::DirectoryUnavailable { .. })
    ));
}
