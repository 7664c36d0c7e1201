//! `sql_query_helper` MCP prompt.

use std::sync::Arc;

use rmcp::model::{
    GetPromptResult, Prompt, PromptArgument, PromptMessage, PromptMessageRole,
};

use crate::mcp::handler::AppState;
use crate::mcp::prompts::string_arg;
use crate::mcp::registry::{Arguments, PromptEntry};

/// Database engine used when the optional `database_type` argument is omitted.
pub const DEFAULT_DATABASE: &str = "PostgreSQL";

/// Build the registry entry for `sql_query_helper`.
#[must_use]
pub fn entry() -> PromptEntry {
    PromptEntry {
        prompt: Prompt::new(
            "sql_query_helper",
            Some("Help write SQL queries"),
            Some(vec![PromptArgument {
                name: "database_type".into(),
                description: Some("Type of database (postgres, mysql, etc.)".into()),
                required: Some(false),
                title: None,
            }]),
        ),
        handler: Box::new(|state, args| Box::pin(handle(state, args))),
    }
}

/// Render the SQL-engineer template for `database_type`.
#[must_use]
pub fn render(database_type: &str) -> String {
    format!(
        "You are an expert {database_type} database engineer. Help the user:\n\
         \n\
         1. Write efficient SQL queries\n\
         2. Optimize existing queries\n\
         3. Explain query execution plans\n\
         4. Follow {database_type} best practices\n\
         5. Ensure proper indexing\n\
         \n\
         Provide clear explanations and examples."
    )
}

async fn handle(
    _state: Arc<AppState>,
    arguments: Option<Arguments>,
) -> Result<GetPromptResult, rmcp::ErrorData> {
    let database_type = string_arg(arguments.as_ref(), "database_type", DEFAULT_DATABASE);

    Ok(GetPromptResult {
        description: Some(format!("SQL query helper for {database_type}")),
        messages: vec![PromptMessage::new_text(
            PromptMessageRole::User,
            render(database_type),
        )],
    })
}
