//! Dirwatch Core Components
//!
//! This crate provides the watch-set state machine for the dirwatch daemon:
//! directory polling with discovery/removal diffing, and incremental
//! line-by-line scanning of tracked files for a magic phrase.

mod config;
mod error;
mod scanner;
mod shutdown;
mod watcher;

pub use config::{WatchConfig, DEFAULT_EXTENSION, DEFAULT_POLL_INTERVAL};
pub use error::{ScanError, WatchError};
pub use scanner::{scan_file, MatchEvent, ScanOutcome};
pub use shutdown::ShutdownFlag;
pub use watcher::{CycleReport, DirectoryWatcher};
