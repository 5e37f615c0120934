//! choice-picker server entry point.
//!
//! Opens the SQLite store, applies migrations, and serves the REST API.

use anyhow::Context;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use choice_picker::api;
use choice_picker::app_state::AppState;
use choice_picker::config::PickerConfig;
use choice_picker::persistence::SqliteStore;
use choice_picker::service::ListService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = PickerConfig::from_env().context("invalid LISTEN_ADDR")?;
    tracing::info!(addr = %config.listen_addr, "starting choice-picker");

    // Open storage
    let store = SqliteStore::connect(
        &config.database_url,
        config.database_max_connections,
        config.database_connect_timeout(),
    )
    .await
    .context("failed to open database")?;
    store.migrate().await.context("failed to apply migrations")?;
    tracing::info!(url = %config.database_url, "database ready");

    // Build application
    let app_state = AppState::new(ListService::new(store.clone()));
    let app = api::app(app_state, config.request_timeout());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    store.close().await;
    tracing::info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::warn!("received Ctrl+C, shutting down"),
        () = terminate => tracing::warn!("received SIGTERM, shutting down"),
    }
}
