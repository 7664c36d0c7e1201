//! `calculate_percentage` MCP tool handler.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};

use crate::mcp::handler::AppState;
use crate::mcp::registry::{Arguments, ToolEntry};
use crate::mcp::tools::schema;

/// Input parameters. Both operands are required.
#[derive(Debug, serde::Deserialize)]
struct PercentageInput {
    part: f64,
    total: f64,
}

/// Build the registry entry for `calculate_percentage`.
#[must_use]
pub fn entry() -> ToolEntry {
    ToolEntry {
        tool: Tool {
            name: "calculate_percentage".into(),
            description: Some("Calculate what percentage 'part' is of 'total'".into()),
            input_schema: schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "part": { "type": "number", "description": "The part value" },
                    "total": { "type": "number", "description": "The total value" }
                },
                "required": ["part", "total"]
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

/// Handle the `calculate_percentage` tool call.
///
/// A zero total yields 0 rather than an error; `divide` is the tool that
/// exercises the division-by-zero failure path.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` when the arguments are missing or not numbers.
#[allow(clippy::float_cmp)] // the guard is for an exact zero total
async fn handle(
    _state: Arc<AppState>,
    args: Arguments,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let input: PercentageInput =
        serde_json::from_value(serde_json::Value::Object(args)).map_err(|err| {
            rmcp::ErrorData::invalid_params(
                format!("invalid calculate_percentage parameters: {err}"),
                None,
            )
        })?;

    let result = if input.total == 0.0 {
        0.0
    } else {
        (input.part / input.total) * 100.0
    };

    Ok(CallToolResult::success(vec![Content::text(
        result.to_string(),
    )]))
}
