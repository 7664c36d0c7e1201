//! `data://stats` MCP resource handler.
//!
//! Reports the live operational counters — real values from the running
//! process, not placeholders.

use std::sync::Arc;

use rmcp::model::{Annotated, RawResource, ReadResourceResult, ResourceContents};

use crate::mcp::handler::AppState;
use crate::mcp::registry::ResourceEntry;

/// URI under which the statistics resource is registered.
pub const URI: &str = "data://stats";

/// Build the registry entry for `data://stats`.
#[must_use]
pub fn entry() -> ResourceEntry {
    ResourceEntry {
        resource: Annotated::new(
            RawResource {
                uri: URI.into(),
                name: "Server Statistics".into(),
                description: Some("Server runtime statistics".into()),
                mime_type: Some("application/json".into()),
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

async fn handle(
    state: Arc<AppState>,
    uri: String,
) -> Result<ReadResourceResult, rmcp::ErrorData> {
    let snapshot = state.stats.snapshot();
    let body = serde_json::to_string_pretty(&snapshot).map_err(|err| {
        rmcp::ErrorData::internal_error(format!("failed to serialize statistics: {err}"), None)
    })?;

    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(body, uri)],
    })
}
