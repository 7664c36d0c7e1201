//! `analyze_text` MCP tool handler.
//!
//! Demonstrates structured output: the result content is the serialized
//! [`TextStatistics`] record.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};

use crate::mcp::handler::AppState;
use crate::mcp::registry::{Arguments, ToolEntry};
use crate::mcp::tools::schema;
use crate::models::text_stats::TextStatistics;

/// Input parameters.
#[derive(Debug, serde::Deserialize)]
struct AnalyzeInput {
    text: String,
}

/// Build the registry entry for `analyze_text`.
#[must_use]
pub fn entry() -> ToolEntry {
    ToolEntry {
        tool: Tool {
            name: "analyze_text".into(),
            description: Some("Analyze text and return structured statistics".into()),
            input_schema: schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "text": { "type": "string", "description": "Text to analyze" }
                },
                "required": ["text"]
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

/// Handle the `analyze_text` tool call.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` when `text` is missing or not a string.
async fn handle(
    _state: Arc<AppState>,
    args: Arguments,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let input: AnalyzeInput =
        serde_json::from_value(serde_json::Value::Object(args)).map_err(|err| {
            rmcp::ErrorData::invalid_params(format!("invalid analyze_text parameters: {err}"), None)
        })?;

    let stats = TextStatistics::analyze(&input.text);
    Ok(CallToolResult::success(vec![Content::json(stats)?]))
}
