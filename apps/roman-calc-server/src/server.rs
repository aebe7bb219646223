//! HTTP server lifecycle: wiring, bind, serve, graceful shutdown.

use anyhow::{Context, Result};
use axum::Router;
use roman_calculator::RomanCalculatorModule;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::signals;

/// Build the application router from configuration.
///
/// # Errors
/// Fails if the calculator module cannot be initialised.
pub fn build_router(config: &AppConfig) -> Result<Router> {
    let module = RomanCalculatorModule::init(&config.converter)
        .context("failed to initialise roman_calculator module")?;

    Ok(module
        .register_rest(Router::new())
        .layer(TraceLayer::new_for_http()))
}

/// Serve until a shutdown signal arrives.
///
/// # Errors
/// Fails if the listener cannot be bound or the server terminates abnormally.
pub async fn run(config: AppConfig) -> Result<()> {
    let addr = config.bind_addr()?;
    let router = build_router(&config)?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(
        addr = %listener.local_addr()?,
        converter = %config.converter.base_url,
        "Roman calculator server listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = signals::wait_for_shutdown().await {
                tracing::error!(error = %e, "Signal handling failed, shutting down");
            }
        })
        .await
        .context("server terminated with error")?;

    tracing::info!("Server stopped");
    Ok(())
}
