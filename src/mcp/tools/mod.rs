//! MCP tool handlers.
//!
//! Each module exposes one tool as an `entry()` returning the descriptor
//! and its boxed handler; `register_all` collects the built-in set.

use std::sync::Arc;

use crate::mcp::registry::CapabilityRegistry;

pub mod analyze_text;
pub mod calculate_percentage;
pub mod calculate_product;
pub mod calculate_sum;
pub mod divide;
pub mod get_user_list;
pub mod greet_user;
pub mod trigger_error;

/// Register every built-in tool.
pub fn register_all(registry: &mut CapabilityRegistry) {
    registry.register_tool(calculate_sum::entry());
    registry.register_tool(calculate_product::entry());
    registry.register_tool(calculate_percentage::entry());
    registry.register_tool(divide::entry());
    registry.register_tool(greet_user::entry());
    registry.register_tool(analyze_text::entry());
    registry.register_tool(get_user_list::entry());
    registry.register_tool(trigger_error::entry());
}

/// Convert a `serde_json::Value::Object` into the `Arc<Map>` expected by `Tool`.
pub(crate) fn schema(value: serde_json::Value) -> Arc<serde_json::Map<String, serde_json::Value>> {
    match value {
        serde_json::Value::Object(map) => Arc::new(map),
        _ => Arc::new(serde_json::Map::default()),
    }
}
