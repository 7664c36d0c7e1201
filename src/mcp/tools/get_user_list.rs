//! `get_user_list` MCP tool handler.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};

use crate::mcp::handler::AppState;
use crate::mcp::registry::{Arguments, ToolEntry};
use crate::mcp::tools::schema;
use crate::models::user::UserList;

/// Input parameters.
#[derive(Debug, serde::Deserialize)]
struct UserListInput {
    #[serde(default)]
    include_inactive: bool,
}

/// Build the registry entry for `get_user_list`.
#[must_use]
pub fn entry() -> ToolEntry {
    ToolEntry {
        tool: Tool {
            name: "get_user_list".into(),
            description: Some("Get a list of users with structured information".into()),
            input_schema: schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "include_inactive": {
                        "type": "boolean",
                        "description": "Include inactive users in the result",
                        "default": false
                    }
                }
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

/// Handle the `get_user_list` tool call.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` when `include_inactive` is not a boolean.
async fn handle(
    _state: Arc<AppState>,
    args: Arguments,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let input: UserListInput =
        serde_json::from_value(serde_json::Value::Object(args)).map_err(|err| {
            rmcp::ErrorData::invalid_params(
                format!("invalid get_user_list parameters: {err}"),
                None,
            )
        })?;

    let list = UserList::assemble(input.include_inactive);
    Ok(CallToolResult::success(vec![Content::json(list)?]))
}
