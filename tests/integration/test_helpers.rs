//! Shared test helpers for dispatch-level integration tests.
//!
//! Provides reusable construction of `AppState` and the built-in
//! registry so individual test modules can focus on behaviour rather
//! than boilerplate.

#![allow(dead_code)] // not every module uses every helper

use std::sync::Arc;

use mcp_workbench::config::GlobalConfig;
use mcp_workbench::mcp::handler::AppState;
use mcp_workbench::mcp::registry::{Arguments, CapabilityRegistry};
use rmcp::model::CallToolResult;

/// Build a `GlobalConfig` with test-friendly values.
pub fn test_config() -> GlobalConfig {
    GlobalConfig::from_toml_str(
        r#"
environment = "test"
max_connections = 10
timeout_seconds = 5

[http]
bind = "127.0.0.1"
port = 0
"#,
    )
    .expect("valid test config")
}

/// Build shared application state over [`test_config`].
pub fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(Arc::new(test_config())))
}

/// Convert a JSON value into the argument map handlers receive.
pub fn args(value: serde_json::Value) -> Arguments {
    match value {
        serde_json::Value::Object(map) => map,
        _ => Arguments::default(),
    }
}

/// Dispatch a tool call against a fresh built-in registry and state.
pub async fn call_tool(
    name: &str,
    arguments: serde_json::Value,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let registry = CapabilityRegistry::builtin();
    registry.call_tool(test_state(), name, args(arguments)).await
}

/// First text content of a tool result, or empty when absent.
pub fn first_text(result: &CallToolResult) -> String {
    result
        .content
        .first()
        .and_then(|content| content.as_text())
        .map(|text| text.text.clone())
        .unwrap_or_default()
}
