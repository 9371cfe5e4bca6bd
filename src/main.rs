#![forbid(unsafe_code)]

//! `ai-workshop-mcp` MCP server binary.
//!
//! Bootstraps configuration and credentials, builds the model client and
//! document store, then serves MCP over stdio or streamable HTTP.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use ai_workshop_mcp::llm::azure::AzureChatClient;
use ai_workshop_mcp::mcp::handler::AppState;
use ai_workshop_mcp::mcp::transport::{self, TransportKind};
use ai_workshop_mcp::storage::FsDocumentStore;
use ai_workshop_mcp::{AppError, GlobalConfig, Result};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "ai-workshop-mcp", about = "AI workshop MCP server", version, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// MCP transport to serve.
    #[arg(long, value_enum, default_value_t = TransportKind::Stdio)]
    transport: TransportKind,

    /// Log output format (text or json). Logs always go to stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Override the directory holding the workshop reference documents.
    #[arg(long)]
    resources_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;
    info!("ai-workshop-mcp server bootstrap");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args))
}

async fn run(args: Cli) -> Result<()> {
    // ── Load configuration ──────────────────────────────
    let mut config = match args.config {
        Some(ref path) => GlobalConfig::load_from_path(path)?,
        None => GlobalConfig::default(),
    };

    if let Some(dir) = args.resources_dir {
        config.resources_dir = dir;
    }
    match config.resources_dir.canonicalize() {
        Ok(canonical) => config.resources_dir = canonical,
        Err(err) => {
            warn!(
                dir = %config.resources_dir.display(),
                %err,
                "resources directory not accessible; resource reads will fail"
            );
        }
    }

    config.apply_env_overrides();
    config.ensure_model_endpoint()?;
    config.load_credentials().await?;
    info!(
        deployment = %config.model.deployment,
        resources_dir = %config.resources_dir.display(),
        "configuration loaded"
    );

    // ── Build collaborators ─────────────────────────────
    let model = AzureChatClient::new(&config.model)?;
    let documents = FsDocumentStore::new(config.resources_dir.clone());
    let state = Arc::new(AppState::new(
        Arc::new(config),
        Arc::new(model),
        Arc::new(documents),
    ));

    // ── Start transport ─────────────────────────────────
    let ct = CancellationToken::new();
    let transport_ct = ct.clone();
    let mut transport_handle = tokio::spawn(transport::serve(args.transport, state, transport_ct));

    // ── Wait for shutdown signal or transport exit ──────
    let outcome = tokio::select! {
        () = shutdown_signal() => {
            info!("shutdown signal received");
            ct.cancel();
            (&mut transport_handle).await
        }
        outcome = &mut transport_handle => outcome,
    };

    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            error!(%err, "transport failed");
            return Err(err);
        }
        Err(err) => {
            return Err(AppError::Mcp(format!("transport task panicked: {err}")));
        }
    }

    info!("ai-workshop-mcp shut down");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!(%err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(err) = result {
                error!(%err, "ctrl-c handler failed");
            }
        }
        () = terminate => {}
    }
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // stdout carries the stdio MCP stream.
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed = match log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    };
    installed.map_err(|err| AppError::Config(format!("tracing subscriber already set: {err}")))
}
