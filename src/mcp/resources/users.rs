//! `data://users` MCP resource handler.

use std::fmt::Write as _;
use std::sync::Arc;

use rmcp::model::{Annotated, RawResource, ReadResourceResult, ResourceContents};

use crate::mcp::handler::AppState;
use crate::mcp::registry::ResourceEntry;
use crate::models::user::sample_directory;

/// URI under which the user roster resource is registered.
pub const URI: &str = "data://users";

/// Build the registry entry for `data://users`.
#[must_use]
pub fn entry() -> ResourceEntry {
    ResourceEntry {
        resource: Annotated::new(
            RawResource {
                uri: URI.into(),
                name: "User List".into(),
                description: Some("List of sample users".into()),
                mime_type: Some("text/plain".into()),
                size: None,
                title: None,
                icons: None,
                meta: None,
            },
            None,
        ),
        handler: Box::new(|state, uri| Box::pin(handle(state, uri))),
    }
}

/// Render the sample directory as a numbered plain-text roster.
#[must_use]
pub fn render() -> String {
    let mut body = String::from("Users:\n");
    for (index, user) in sample_directory().iter().enumerate() {
        let _ = writeln!(body, "{}. {} ({})", index + 1, user.name, user.email);
    }
    body
}

async fn handle(
    _state: Arc<AppState>,
    uri: String,
) -> Result<ReadResourceResult, rmcp::ErrorData> {
    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(render(), uri)],
    })
}
