//! `debug_assistant` MCP prompt.

use std::sync::Arc;

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};

use crate::mcp::handler::AppState;
use crate::mcp::registry::{Arguments, PromptEntry};

/// Build the registry entry for `debug_assistant`.
#[must_use]
pub fn entry() -> PromptEntry {
    PromptEntry {
        prompt: Prompt::new(
            "debug_assistant",
            Some("Generate a debugging assistant prompt"),
            Some(Vec::new()),
        ),
        handler: Box::new(|state, args| Box::pin(handle(state, args))),
    }
}

/// Render the debugging-assistant template.
#[must_use]
pub fn render() -> String {
    "You are a debugging assistant. Help the user:\n\
     \n\
     1. Understand the error message\n\
     2. Identify the root cause\n\
     3. Suggest potential fixes\n\
     4. Provide prevention strategies\n\
     \n\
     Ask clarifying questions if needed."
        .to_owned()
}

async fn handle(
    _state: Arc<AppState>,
    _arguments: Option<Arguments>,
) -> Result<GetPromptResult, rmcp::ErrorData> {
    Ok(GetPromptResult {
        description: Some("Debugging assistant prompt".to_owned()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, render())],
    })
}
