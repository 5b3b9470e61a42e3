// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use plunk::{PlunkOptions, PlunkService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trackmail_core::kernel::jobs::SchedulerConfig;
use trackmail_core::kernel::{PlunkAdapter, ServerDeps};
use trackmail_core::{server::build_app, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,trackmail_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Trackmail API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Provider client
    let mut plunk_options = PlunkOptions::new(config.plunk_api_key.clone());
    plunk_options.send_url = config.plunk_api_url.clone();
    plunk_options.timeout = config.provider_timeout;
    let plunk = PlunkService::new(plunk_options).context("Failed to create Plunk client")?;
    tracing::info!(send_url = %plunk.send_url(), "Plunk client ready");

    let deps = ServerDeps::new(
        Arc::new(PlunkAdapter::new(Arc::new(plunk))),
        config.tracking_base_url.clone(),
        SchedulerConfig::with_tick_interval(config.scheduler_tick),
    );

    // Start the scheduler loop before accepting requests
    let scheduler = deps.scheduler.clone();
    scheduler.start();

    let app = build_app(deps, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped, shutting down scheduler");
    scheduler.stop().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
