//! `greet_user` MCP tool handler.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};

use crate::mcp::handler::AppState;
use crate::mcp::registry::{Arguments, ToolEntry};
use crate::mcp::tools::schema;

/// Fallback used when no name is supplied. The schema marks `name`
/// required, but a missing value degrades to a generic greeting rather
/// than an error.
const FALLBACK_NAME: &str = "stranger";

/// Input parameters.
#[derive(Debug, serde::Deserialize)]
struct GreetInput {
    name: Option<String>,
}

/// Build the registry entry for `greet_user`.
#[must_use]
pub fn entry() -> ToolEntry {
    ToolEntry {
        tool: Tool {
            name: "greet_user".into(),
            description: Some("Generate a personalized greeting".into()),
            input_schema: schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "User's name" }
                },
                "required": ["name"]
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

/// Handle the `greet_user` tool call.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` when `name` is present but not a string.
async fn handle(
    _state: Arc<AppState>,
    args: Arguments,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let input: GreetInput =
        serde_json::from_value(serde_json::Value::Object(args)).map_err(|err| {
            rmcp::ErrorData::invalid_params(format!("invalid greet_user parameters: {err}"), None)
        })?;

    let name = input.name.as_deref().unwrap_or(FALLBACK_NAME);
    Ok(CallToolResult::success(vec![Content::text(format!(
        "Hello, {name}! Welcome to the workbench MCP server."
    ))]))
}
