//! Signal handling for graceful shutdown.

use dirwatch_core::ShutdownFlag;

/// Spawn a task that sets the shutdown flag on SIGINT or SIGTERM.
///
/// The watch loop checks the flag between poll cycles, so a cycle already
/// in progress always completes before the process stops.
pub fn spawn_listener(shutdown: ShutdownFlag) {
    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received SIGINT");
            }
            _ = wait_for_sigterm() => {
                tracing::info!("Received SIGTERM");
            }
        }
        shutdown.trigger();
    });
}

/// Wait for SIGTERM signal
#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");

    sigterm.recv().await;
}

#[cfg(not(unix))]
async fn wait_for_sigterm() {
    // On non-Unix platforms, just wait forever
    std::future::pending::<()>().await;
}
