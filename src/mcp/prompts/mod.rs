//! MCP prompt templates.

use crate::mcp::registry::CapabilityRegistry;

pub mod code_review;
pub mod debug_assistant;
pub mod sql_query_helper;

/// Register every built-in prompt.
pub fn register_all(registry: &mut CapabilityRegistry) {
    registry.register_prompt(code_review::entry());
    registry.register_prompt(debug_assistant::entry());
    registry.register_prompt(sql_query_helper::entry());
}

/// Extract a string argument from an optional prompt argument map,
/// falling back to `default` when the map or the key is absent.
pub(crate) fn string_arg<'a>(
    arguments: Option<&'a serde_json::Map<String, serde_json::Value>>,
    key: &str,
    default: &'a str,
) -> &'a str {
    arguments
        .and_then(|args| args.get(key))
        .and_then(serde_json::Value::as_str)
        .unwrap_or(default)
}
