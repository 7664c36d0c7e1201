//! `trigger_error` MCP tool handler.
//!
//! Always fails. Exists to exercise the error reporting path end to end:
//! the failure flows through the registry's error accounting and back to
//! the client as a protocol error.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};

use crate::mcp::handler::AppState;
use crate::mcp::registry::{Arguments, ToolEntry};
use crate::mcp::tools::schema;

/// Build the registry entry for `trigger_error`.
#[must_use]
pub fn entry() -> ToolEntry {
    ToolEntry {
        tool: Tool {
            name: "trigger_error".into(),
            description: Some("Trigger an error to test the error reporting path".into()),
            input_schema: schema(serde_json::json!({
                "type": "object",
                "properties": {}
            })),
            output_schema: None,
            annotations: None,
            title: None,
            icons: None,
            meta: None,
        },
        handler: Box::new(|state, args| Box::pin(handle(state, args))),
    }
}

/// Handle the `trigger_error` tool call.
///
/// # Errors
///
/// Always returns `rmcp::ErrorData`; that is the point of the tool.
async fn handle(
    _state: Arc<AppState>,
    _args: Arguments,
) -> Result<CallToolResult, rmcp::ErrorData> {
    Err(rmcp::ErrorData::internal_error(
        "deliberate failure raised by trigger_error",
        None,
    ))
}
