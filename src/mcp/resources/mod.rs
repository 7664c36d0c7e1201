//! MCP resource handlers.

use crate::mcp::registry::CapabilityRegistry;

pub mod settings;
pub mod stats;
pub mod users;

/// Register every built-in resource.
pub fn register_all(registry: &mut CapabilityRegistry) {
    registry.register_resource(settings::entry());
    registry.register_resource(users::entry());
    registry.register_resource(stats::entry());
}
