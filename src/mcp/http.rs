//! Streamable HTTP transport.
//!
//! Mounts rmcp's [`StreamableHttpService`] behind an axum router on the
//! configured bind address, with a `/health` probe route and an optional
//! permissive CORS layer.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
};
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tracing::info;

use super::handler::{AppState, WorkbenchServer};
use crate::{AppError, Result};

/// Handler for `GET /health` — returns 200 OK with a plain-text body.
///
/// Useful for probing liveness without initiating an MCP session.
async fn health() -> &'static str {
    "ok"
}

/// Start the streamable HTTP MCP transport on the configured address.
///
/// Each session creates a fresh [`WorkbenchServer`] sharing the same
/// [`AppState`], so counters accumulate across sessions.
///
/// # Errors
///
/// Returns `AppError::Config` if the bind address is invalid, or
/// `AppError::Transport` if the server fails to bind or serve.
pub async fn serve_http(state: Arc<AppState>, ct: CancellationToken) -> Result<()> {
    let bind: SocketAddr = state
        .config
        .http_addr()
        .parse()
        .map_err(|err| AppError::Config(format!("invalid HTTP bind address: {err}")))?;

    let service = StreamableHttpService::new(
        {
            let state = Arc::clone(&state);
            move || Ok(WorkbenchServer::new(Arc::clone(&state)))
        },
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );

    let mut router = axum::Router::new()
        .nest_service("/mcp", service)
        .route("/health", get(health));

    // Permissive but credential-free: allow-all origins combined with
    // credentials is rejected by browsers.
    if state.config.http.cors {
        router = router.layer(CorsLayer::permissive());
    }

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|err| AppError::Transport(format!("failed to bind HTTP on {bind}: {err}")))?;

    info!(%bind, "starting streamable HTTP MCP transport");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            ct.cancelled().await;
        })
        .await
        .map_err(|err| AppError::Transport(format!("HTTP server error: {err}")))?;

    info!("streamable HTTP MCP transport shut down");
    Ok(())
}
