//! HTTP server initialization and runtime setup.
//!
//! Builds the template store and application state, then runs Axum until
//! Ctrl+C.

use crate::config::Config;
use crate::domain::repositories::TemplateStore;
use crate::infrastructure::template_store::FsTemplateStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// A missing template is not fatal at startup: it is logged, reported by
/// `/health`, and each `/generate-word` request answers 500 until the file
/// appears.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = FsTemplateStore::new(&config.template_path);
    if store.health_check().await {
        tracing::info!("Template found at {}", store.location());
    } else {
        tracing::warn!(
            "Template {} is not readable; /generate-word will fail until it exists",
            store.location()
        );
    }

    let state = AppState::new(store, config.fill_mode, &config.output_filename);
    let app = app_router(state, config.max_body_bytes);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
