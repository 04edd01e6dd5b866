//! Configuration for a watch session.

use std::path::PathBuf;
use std::time::Duration;

/// Default file suffix filter.
pub const DEFAULT_EXTENSION: &str = ".txt";

/// Default delay between poll cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Parameters of one watch session, immutable once the loop starts.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Directory whose listing is polled each cycle
    pub directory: PathBuf,

    /// Literal substring searched for in each new line
    pub magic: String,

    /// File name suffix a file must have to be tracked
    pub extension: String,

    /// Delay between poll cycles
    pub poll_interval: Duration,
}
