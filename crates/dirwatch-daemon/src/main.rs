//! Dirwatch Daemon
//!
//! Long-running process that polls a directory for files containing a
//! magic phrase and logs every match with file name and line number.

mod driver;
mod signals;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use dirwatch_core::{ShutdownFlag, WatchConfig, DEFAULT_EXTENSION, DEFAULT_POLL_INTERVAL};

#[derive(Parser, Debug)]
#[command(name = "dirwatch")]
#[command(about = "Monitors a directory for files containing a magic phrase")]
#[command(version)]
struct Cli {
    /// Directory to watch
    directory: PathBuf,

    /// Magic phrase to search files for
    magic: String,

    /// Extension of files to search through
    #[arg(long = "ext", default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Interval in seconds between directory polls
    #[arg(long = "int", default_value_t = DEFAULT_POLL_INTERVAL.as_secs_f64())]
    interval: f64,
}

impl Cli {
    fn into_config(self) -> Result<WatchConfig> {
        anyhow::ensure!(
            self.interval > 0.0 && self.interval.is_finite(),
            "--int must be a positive number of seconds"
        );
        Ok(WatchConfig {
            directory: self.directory,
            magic: self.magic,
            extension: self.extension,
            poll_interval: Duration::from_secs_f64(self.interval),
        })
    }
}

/// Run the daemon until a shutdown signal arrives.
async fn run(cli: Cli) -> Result<()> {
    let start_time = std::time::Instant::now();

    tracing::info!(
        pid = std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
        "Starting dirwatch"
    );

    let config = cli.into_config()?;
    tracing::info!(
        magic = %config.magic,
        directory = %config.directory.display(),
        extension = %config.extension,
        "Searching for magic phrase"
    );

    let shutdown = ShutdownFlag::new();
    signals::spawn_listener(shutdown.clone());

    driver::run(config, shutdown).await;

    tracing::info!(
        uptime_secs = start_time.elapsed().as_secs(),
        "Stopped dirwatch"
    );

    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Run async runtime
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}
