//! Shutdown trigger for the HTTP server.

use anyhow::{Context, Result};
use tokio::signal;

/// Resolve once Ctrl+C or SIGTERM arrives; returns the signal name.
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn wait_for_shutdown() -> Result<&'static str> {
    #[cfg(unix)]
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
        .context("failed to install SIGTERM handler")?;
    #[cfg(unix)]
    let terminate = sigterm.recv();
    #[cfg(not(unix))]
    let terminate = std::future::pending::<Option<()>>();

    let name = tokio::select! {
        res = signal::ctrl_c() => {
            res.context("failed to listen for Ctrl+C")?;
            "SIGINT"
        }
        _ = terminate => "SIGTERM",
    };

    tracing::info!(signal = name, "Shutdown signal received, draining connections");
    Ok(name)
}
