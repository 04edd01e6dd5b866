//! Outer retry loop around the watch loop.
//!
//! Keeps the process alive across a transient missing or unlistable
//! directory: every error is logged once, then the loop re-enters with a
//! fresh watch-set after a fixed backoff, matching a mount that comes and
//! goes.

use dirwatch_core::{DirectoryWatcher, ShutdownFlag, WatchConfig, WatchError};
use std::time::Duration;
use tracing::{error, warn};

/// Delay before re-entering the watch loop after an error.
const RETRY_BACKOFF: Duration = Duration::from_secs(3);

/// Run the watch loop until shutdown, recovering from every error.
pub async fn run(config: WatchConfig, shutdown: ShutdownFlag) {
    while !shutdown.is_triggered() {
        let mut watcher = DirectoryWatcher::new(config.clone(), shutdown.clone());
        match watcher.run().await {
            Ok(()) => break,
            Err(WatchError::DirectoryUnavailable { path, .. }) => {
                warn!(directory = %path.display(), "Watch directory unavailable, retrying");
            }
            Err(e) => {
                error!(error = %e, "Unhandled error in watch loop, retrying");
            }
        }
        tokio::time::sleep(RETRY_BACKOFF).await;
    }
}
