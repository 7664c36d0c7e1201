//! `calculate_product` MCP tool handler.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};

use crate::mcp::handler::AppState;
use crate::mcp::registry::{Arguments, ToolEntry};
use crate::mcp::tools::schema;

/// Input parameters. Missing operands default to zero.
#[derive(Debug, serde::Deserialize)]
struct ProductInput {
    #[serde(default)]
    a: f64,
    #[serde(default)]
    b: f64,
}

/// Build the registry entry for `calculate_product`.
#[must_use]
pub fn entry() -> ToolEntry {
    ToolEntry {
        tool: Tool {
            name: "calculate_product".into(),
            description: Some("Multiply two numbers together".into()),
            input_schema: schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "a": { "type": "number", "description": "First number" },
                    "b": { "type": "number", "description": "Second number" }
                },
                "required": ["a", "b"]
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

/// Handle the `calculate_product` tool call.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` when the arguments are not numbers.
async fn handle(
    _state: Arc<AppState>,
    args: Arguments,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let input: ProductInput =
        serde_json::from_value(serde_json::Value::Object(args)).map_err(|err| {
            rmcp::ErrorData::invalid_params(
                format!("invalid calculate_product parameters: {err}"),
                None,
            )
        })?;

    let result = input.a * input.b;
    Ok(CallToolResult::success(vec![Content::text(format!(
        "The product of {} and {} is {result}",
        input.a, input.b
    ))]))
}
