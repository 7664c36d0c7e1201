#![forbid(unsafe_code)]

//! `mcp-workbench` — MCP capability server binary.
//!
//! Bootstraps configuration, initializes tracing, and serves the
//! capability registry over the selected transport (stdio or HTTP).

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use mcp_workbench::config::{GlobalConfig, LogFormat};
use mcp_workbench::mcp::handler::AppState;
use mcp_workbench::mcp::{http, transport};
use mcp_workbench::{AppError, Result};

/// Transport the server listens on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum TransportKind {
    /// Newline-delimited JSON-RPC over stdin/stdout.
    Stdio,
    /// Streamable HTTP under `/mcp`.
    Http,
}

/// CLI log format selector, mapped onto [`LogFormat`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum CliLogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "mcp-workbench", about = "MCP capability server", version, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log output format, overriding the configured value.
    #[arg(long, value_enum)]
    log_format: Option<CliLogFormat>,

    /// Transport to serve on.
    #[arg(long, value_enum, default_value_t = TransportKind::Stdio)]
    transport: TransportKind,

    /// HTTP port, overriding the configured value.
    #[arg(long)]
    http_port: Option<u16>,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Configuration first: the tracing filter fallback and format live in it.
    let mut config = match args.config {
        Some(ref path) => GlobalConfig::load_from_path(path)?,
        None => GlobalConfig::default(),
    };
    config.apply_env_overrides()?;

    if let Some(port) = args.http_port {
        config.http.port = port;
    }
    let log_format = match args.log_format {
        Some(CliLogFormat::Text) => LogFormat::Text,
        Some(CliLogFormat::Json) => LogFormat::Json,
        None => config.telemetry.log_format,
    };

    init_tracing(log_format, &config.telemetry.log_filter)?;
    info!("mcp-workbench server bootstrap");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args.transport, config))
}

async fn run(transport_kind: TransportKind, config: GlobalConfig) -> Result<()> {
    let config = Arc::new(config);
    info!(environment = %config.environment, "configuration loaded");

    let state = Arc::new(AppState::new(Arc::clone(&config)));
    let ct = CancellationToken::new();

    let serve_ct = ct.clone();
    let serve_state = Arc::clone(&state);
    let mut serve_handle = tokio::spawn(async move {
        match transport_kind {
            TransportKind::Stdio => transport::serve_stdio(serve_state, serve_ct).await,
            TransportKind::Http => http::serve_http(serve_state, serve_ct).await,
        }
    });

    info!("MCP server ready");

    // A transport that stops on its own ends the process: clean exit on
    // Ok (the peer went away), startup failures propagate as AppError.
    let outcome = tokio::select! {
        joined = &mut serve_handle => joined,
        () = shutdown_signal() => {
            info!("shutdown signal received");
            ct.cancel();
            serve_handle.await
        }
    };
    ct.cancel();

    match outcome {
        Ok(Ok(())) => {
            info!("mcp-workbench shut down");
            Ok(())
        }
        Ok(Err(err)) => Err(err),
        Err(join_err) => Err(AppError::Transport(format!(
            "transport task failed: {join_err}"
        ))),
    }
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(err) => {
                tracing::warn!(%err, "failed to register SIGTERM handler, using ctrl-c only");
                let _ = ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = ctrl_c.await {
            tracing::error!(%err, "ctrl-c signal handler failed");
        }
    }
}

fn init_tracing(log_format: LogFormat, fallback_filter: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));
    // stderr keeps stdout clean for the stdio transport.
    let subscriber = fmt().with_env_filter(env_filter).with_writer(std::io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
