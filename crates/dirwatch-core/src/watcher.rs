//! Directory polling and watch-set maintenance.
//!
//! One `DirectoryWatcher` owns the mapping of tracked file names to
//! last-scanned line offsets. Each poll cycle diffs that mapping against a
//! fresh directory listing (discover new files, evict vanished ones) and
//! then scans every remaining file from its stored offset.

use crate::scanner::{scan_file, MatchEvent};
use crate::{ShutdownFlag, WatchConfig, WatchError};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

/// What one poll cycle observed, for callers that need more than logs.
#[derive(Debug, Clone, Default)]
pub struct CycleReport {
    /// Files that entered the watch-set this cycle
    pub discovered: Vec<String>,
    /// Files evicted because they left the directory listing
    pub removed: Vec<String>,
    /// Magic-phrase matches found this cycle
    pub matches: Vec<MatchEvent>,
}

impl CycleReport {
    /// True when the cycle observed no changes and no matches.
    pub fn is_empty(&self) -> bool {
        self.discovered.is_empty() && self.removed.is_empty() && self.matches.is_empty()
    }
}

/// Polls one directory for files containing the magic phrase.
pub struct DirectoryWatcher {
    config: WatchConfig,
    watch_set: BTreeMap<String, usize>,
    shutdown: ShutdownFlag,
}

impl DirectoryWatcher {
    /// Create a watcher with an empty watch-set.
    pub fn new(config: WatchConfig, shutdown: ShutdownFlag) -> Self {
        Self {
            config,
            watch_set: BTreeMap::new(),
            shutdown,
        }
    }

    /// Names currently tracked, in sorted order.
    pub fn tracked_files(&self) -> Vec<&str> {
        self.watch_set.keys().map(String::as_str).collect()
    }

    /// Stored offset for a tracked file, if any.
    pub fn offset(&self, name: &str) -> Option<usize> {
        self.watch_set.get(name).copied()
    }

    /// Run one full poll cycle: list, discover, remove, scan.
    pub fn poll_once(&mut self) -> Result<CycleReport, WatchError> {
        let listing = self.list_directory()?;
        let mut report = CycleReport::default();

        // Discovery: matching names not yet tracked start at offset 0
        for name in &listing {
            if name.ends_with(&self.config.extension) && !self.watch_set.contains_key(name) {
                self.watch_set.insert(name.clone(), 0);
                info!(file = %name, "Found new file to monitor");
                report.discovered.push(name.clone());
            }
        }

        // Removal: tracked names absent from this listing snapshot
        let gone: Vec<String> = self
            .watch_set
            .keys()
            .filter(|name| !listing.contains(*name))
            .cloned()
            .collect();
        for name in gone {
            self.watch_set.remove(&name);
            info!(
                file = %name,
                directory = %self.config.directory.display(),
                "File removed from watch directory"
            );
            report.removed.push(name);
        }

        // Scan: per-file errors skip the file and keep its offset; a
        // permanently gone file is evicted by the next cycle's removal pass
        for (name, offset) in self.watch_set.iter_mut() {
            let path = self.config.directory.join(name.as_str());
            match scan_file(&path, &self.config.magic, *offset) {
                Ok(outcome) => {
                    for event in &outcome.matches {
                        info!(
                            file = %event.file,
                            line = event.line_number,
                            magic = %self.config.magic,
                            "Found magic phrase"
                        );
                    }
                    *offset = outcome.line_count;
                    report.matches.extend(outcome.matches);
                }
                Err(e) => {
                    warn!(file = %name, error = %e, "Skipping file this cycle");
                }
            }
        }

        Ok(report)
    }

    /// Poll repeatedly until the shutdown flag is observed between cycles.
    ///
    /// Returns `Ok(())` on cooperative shutdown. The first cycle error ends
    /// the loop; recovery belongs to the caller.
    pub async fn run(&mut self) -> Result<(), WatchError> {
        debug!(directory = %self.config.directory.display(), "Watching directory");

        while !self.shutdown.is_triggered() {
            self.poll_once()?;
            tokio::time::sleep(self.config.poll_interval).await;
        }

        Ok(())
    }

    fn list_directory(&self) -> Result<BTreeSet<String>, WatchError> {
        let entries = std::fs::read_dir(&self.config.directory).map_err(|source| {
            WatchError::DirectoryUnavailable {
                path: self.config.directory.clone(),
                source,
            }
        })?;

        let mut names = BTreeSet::new();
        for entry in entries {
            let entry = entry?;
            names.insert(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}
