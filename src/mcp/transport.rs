//! MCP transport selection.
//!
//! stdio serves a single client over stdin/stdout and is what IDE hosts
//! launch. The streamable HTTP transport lives in [`super::http`].

use std::fmt;
use std::sync::Arc;

use rmcp::service::ServiceExt;
use rmcp::transport::io::stdio;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::handler::{AppState, WorkshopServer};
use super::http;
use crate::{AppError, Result};

/// Which transport the server listens on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TransportKind {
    /// stdin/stdout, one client per process.
    #[default]
    Stdio,
    /// Streamable HTTP on `127.0.0.1:<http_port>/mcp`.
    Http,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => f.write_str("stdio"),
            Self::Http => f.write_str("http"),
        }
    }
}

/// Serve MCP on `kind` until the client goes away or `ct` fires.
///
/// # Errors
///
/// Returns `AppError::Mcp` if the transport cannot start or fails while
/// running.
pub async fn serve(
    kind: TransportKind,
    state: Arc<AppState>,
    ct: CancellationToken,
) -> Result<()> {
    info!(transport = %kind, "starting MCP transport");
    match kind {
        TransportKind::Stdio => serve_stdio(state, ct).await,
        TransportKind::Http => http::serve_http(state, ct).await,
    }
}

/// Serve one client over stdin/stdout.
///
/// # Errors
///
/// Returns `AppError::Mcp` if the handshake fails or the session ends
/// abnormally.
pub async fn serve_stdio(state: Arc<AppState>, ct: CancellationToken) -> Result<()> {
    let running = WorkshopServer::new(state)
        .serve_with_ct(stdio(), ct)
        .await
        .map_err(|err| AppError::Mcp(format!("stdio handshake failed: {err}")))?;

    let reason = running
        .waiting()
        .await
        .map_err(|err| AppError::Mcp(format!("stdio session ended abnormally: {err}")))?;

    info!(?reason, "stdio session closed");
    Ok(())
}
