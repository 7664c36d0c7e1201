//! Stdio transport setup.
//!
//! Wires [`WorkbenchServer`] to stdin/stdout for direct invocation by
//! model-calling clients. Logging goes to stderr so stdout stays clean
//! for the newline-delimited JSON-RPC stream.

use std::sync::Arc;

use rmcp::service::ServiceExt;
use rmcp::transport::io::stdio;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::handler::{AppState, WorkbenchServer};
use crate::{AppError, Result};

/// Serve the MCP server over stdio until the cancellation token fires.
///
/// # Errors
///
/// Returns `AppError::Transport` if the transport fails to initialize
/// or the service loop ends with an error.
pub async fn serve_stdio(state: Arc<AppState>, ct: CancellationToken) -> Result<()> {
    let server = WorkbenchServer::new(state);
    let transport = stdio();

    info!("starting stdio MCP transport");
    let service = server
        .serve_with_ct(transport, ct)
        .await
        .map_err(|err| AppError::Transport(format!("stdio transport failed: {err}")))?;

    service
        .waiting()
        .await
        .map_err(|err| AppError::Transport(format!("stdio service error: {err}")))?;

    info!("stdio MCP transport shut down");
    Ok(())
}
