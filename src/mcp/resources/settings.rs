//! `config://settings` MCP resource handler.
//!
//! Renders the live configuration, not a canned string: what the client
//! reads is what the server is actually running with.

use std::sync::Arc;

use rmcp::model::{Annotated, RawResource, ReadResourceResult, ResourceContents};

use crate::config::GlobalConfig;
use crate::mcp::handler::AppState;
use crate::mcp::registry::ResourceEntry;

/// URI under which the settings resource is registered.
pub const URI: &str = "config://settings";

/// Build the registry entry for `config://settings`.
#[must_use]
pub fn entry() -> ResourceEntry {
    ResourceEntry {
        resource: Annotated::new(
            RawResource {
                uri: URI.into(),
                name: "Server Settings".into(),
                description: Some("Server configuration settings".into()),
                mime_type: Some("text/plain".into()),
                size: None,
                title: None,
                icons: None,
                meta: None,
            },
            None,
        ),
        handler: Box::new(|state, uri| Box::pin(handle(state, uri))),
    }
}

/// Render the configuration as the plain-text settings document.
#[must_use]
pub fn render(config: &GlobalConfig) -> String {
    format!(
        "Server Configuration:\n\
         - Version: {version}\n\
         - Environment: {environment}\n\
         - Max Connections: {max_connections}\n\
         - Timeout: {timeout}s\n\
         - HTTP Bind: {addr}\n",
        version = env!("CARGO_PKG_VERSION"),
        environment = config.environment,
        max_connections = config.max_connections,
        timeout = config.timeout_seconds,
        addr = config.http_addr(),
    )
}

async fn handle(
    state: Arc<AppState>,
    uri: String,
) -> Result<ReadResourceResult, rmcp::ErrorData> {
    let body = render(&state.config);
    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(body, uri)],
    })
}
