//! Streamable HTTP transport for networked clients.
//!
//! Mounts the rmcp streamable HTTP service at `/mcp` behind an axum router,
//! alongside a `/health` liveness check.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::handler::{AppState, WorkshopServer};
use crate::{AppError, Result};

/// Handler for `GET /health`; returns 200 OK with a plain-text body.
async fn health() -> &'static str {
    "ok"
}

/// Build the axum router serving `/mcp` and `/health`.
///
/// Each MCP session gets its own [`WorkshopServer`] sharing `state`.
/// Cancelling `ct` closes every session and cancels in-flight requests.
#[must_use]
pub fn router(state: Arc<AppState>, ct: &CancellationToken) -> Router {
    let config = StreamableHttpServerConfig {
        cancellation_token: ct.child_token(),
        ..StreamableHttpServerConfig::default()
    };
    let service = StreamableHttpService::new(
        move || Ok(WorkshopServer::new(Arc::clone(&state))),
        Arc::new(LocalSessionManager::default()),
        config,
    );

    Router::new()
        .route("/health", get(health))
        .nest_service("/mcp", service)
}

/// Serve the streamable HTTP transport on `127.0.0.1:<http_port>` until the
/// cancellation token fires.
///
/// # Errors
///
/// Returns `AppError::Mcp` if the listener cannot bind or the server fails.
pub async fn serve_http(state: Arc<AppState>, ct: CancellationToken) -> Result<()> {
    let bind = SocketAddr::from(([127, 0, 0, 1], state.config.http_port));
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|err| AppError::Mcp(format!("failed to bind {bind}: {err}")))?;

    info!(%bind, "starting streamable HTTP MCP transport");
    axum::serve(listener, router(state, &ct))
        .with_graceful_shutdown(ct.cancelled_owned())
        .await
        .map_err(|err| AppError::Mcp(format!("http transport failed: {err}")))?;

    info!("streamable HTTP MCP transport shut down");
    Ok(())
}
