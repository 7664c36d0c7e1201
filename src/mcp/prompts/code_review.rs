//! `code_review` MCP prompt.

use std::sync::Arc;

use rmcp::model::{
    GetPromptResult, Prompt, PromptArgument, PromptMessage, PromptMessageRole,
};

use crate::mcp::handler::AppState;
use crate::mcp::prompts::string_arg;
use crate::mcp::registry::{Arguments, PromptEntry};

/// Language used when the optional `language` argument is omitted.
pub const DEFAULT_LANGUAGE: &str = "python";

/// Build the registry entry for `code_review`.
#[must_use]
pub fn entry() -> PromptEntry {
    PromptEntry {
        prompt: Prompt::new(
            "code_review",
            Some("Generate a code review prompt"),
            Some(vec![PromptArgument {
                name: "language".into(),
                description: Some("Programming language".into()),
                required: Some(false),
                title: None,
            }]),
        ),
        handler: Box::new(|state, args| Box::pin(handle(state, args))),
    }
}

/// Render the expert-reviewer template for `language`.
#[must_use]
pub fn render(language: &str) -> String {
    format!(
        "You are an expert {language} code reviewer. Please review the following code and provide:\n\
         \n\
         1. Code quality assessment\n\
         2. Potential bugs or issues\n\
         3. Performance improvements\n\
         4. Best practices recommendations\n\
         5. Security considerations\n\
         \n\
         Be specific and constructive in your feedback."
    )
}

async fn handle(
    _state: Arc<AppState>,
    arguments: Option<Arguments>,
) -> Result<GetPromptResult, rmcp::ErrorData> {
    let language = string_arg(arguments.as_ref(), "language", DEFAULT_LANGUAGE);

    Ok(GetPromptResult {
        description: Some(format!("Code review prompt for {language}")),
        messages: vec![PromptMessage::new_text(
            PromptMessageRole::User,
            render(language),
        )],
    })
}
