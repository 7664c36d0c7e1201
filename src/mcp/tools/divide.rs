//! `divide` MCP tool handler.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};

use crate::mcp::handler::AppState;
use crate::mcp::registry::{Arguments, ToolEntry};
use crate::mcp::tools::schema;

/// Input parameters. Both operands are required.
#[derive(Debug, serde::Deserialize)]
struct DivideInput {
    a: f64,
    b: f64,
}

/// Build the registry entry for `divide`.
#[must_use]
pub fn entry() -> ToolEntry {
    ToolEntry {
        tool: Tool {
            name: "divide".into(),
            description: Some("Divide one number by another".into()),
            input_schema: schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "a": { "type": "number", "description": "Dividend" },
                    "b": { "type": "number", "description": "Divisor" }
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

/// Handle the `divide` tool call.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` when the arguments are missing or not
/// numbers, or when the divisor is zero.
#[allow(clippy::float_cmp)] // the check is for an exact zero divisor
async fn handle(
    _state: Arc<AppState>,
    args: Arguments,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let input: DivideInput =
        serde_json::from_value(serde_json::Value::Object(args)).map_err(|err| {
            rmcp::ErrorData::invalid_params(format!("invalid divide parameters: {err}"), None)
        })?;

    if input.b == 0.0 {
        return Err(rmcp::ErrorData::invalid_params("division by zero", None));
    }

    let result = input.a / input.b;
    Ok(CallToolResult::success(vec![Content::text(format!(
        "{} divided by {} is {result}",
        input.a, input.b
    ))]))
}
