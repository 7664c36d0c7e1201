//! Capability registry: identifier → handler maps for tools, resources,
//! and prompts.
//!
//! Every capability kind dispatches the same way: look up the identifier,
//! invoke the stored handler, or fail through a single "unknown
//! identifier" path. Handlers are boxed async functions receiving the
//! shared [`AppState`] plus the request arguments — no globals.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use rmcp::model::{
    CallToolResult, GetPromptResult, Prompt, ReadResourceResult, Resource, Tool,
};
use rmcp::ErrorData;

use crate::mcp::handler::AppState;

/// JSON object shape used for tool and prompt arguments.
pub type Arguments = serde_json::Map<String, serde_json::Value>;

/// Boxed async tool handler.
pub type ToolHandler = Box<
    dyn Fn(Arc<AppState>, Arguments) -> BoxFuture<'static, Result<CallToolResult, ErrorData>>
        + Send
        + Sync,
>;

/// Boxed async resource handler.
pub type ResourceHandler = Box<
    dyn Fn(Arc<AppState>, String) -> BoxFuture<'static, Result<ReadResourceResult, ErrorData>>
        + Send
        + Sync,
>;

/// Boxed async prompt handler.
pub type PromptHandler = Box<
    dyn Fn(
            Arc<AppState>,
            Option<Arguments>,
        ) -> BoxFuture<'static, Result<GetPromptResult, ErrorData>>
        + Send
        + Sync,
>;

/// A registered tool: descriptor plus handler.
pub struct ToolEntry {
    /// Protocol descriptor returned by `tools/list`.
    pub tool: Tool,
    /// Handler invoked by `tools/call`.
    pub handler: ToolHandler,
}

/// A registered resource: descriptor plus handler.
pub struct ResourceEntry {
    /// Protocol descriptor returned by `resources/list`.
    pub resource: Resource,
    /// Handler invoked by `resources/read`.
    pub handler: ResourceHandler,
}

/// A registered prompt: descriptor plus handler.
pub struct PromptEntry {
    /// Protocol descriptor returned by `prompts/list`.
    pub prompt: Prompt,
    /// Handler invoked by `prompts/get`.
    pub handler: PromptHandler,
}

/// Capability kind, used to select the protocol error code on a miss.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CapabilityKind {
    /// Callable function.
    Tool,
    /// Readable data URI.
    Resource,
    /// Reusable message template.
    Prompt,
}

/// The dispatch tables for all three capability kinds.
#[derive(Default)]
pub struct CapabilityRegistry {
    tools: HashMap<String, ToolEntry>,
    resources: HashMap<String, ResourceEntry>,
    prompts: HashMap<String, PromptEntry>,
}

impl CapabilityRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry populated with the built-in capability set.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        crate::mcp::tools::register_all(&mut registry);
        crate::mcp::resources::register_all(&mut registry);
        crate::mcp::prompts::register_all(&mut registry);
        registry
    }

    /// Register a tool. Re-registering an existing name replaces the
    /// previous entry (last write wins).
    pub fn register_tool(&mut self, entry: ToolEntry) {
        self.tools.insert(entry.tool.name.to_string(), entry);
    }

    /// Register a resource. Re-registering an existing URI replaces the
    /// previous entry (last write wins).
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        self.resources.insert(entry.resource.uri.clone(), entry);
    }

    /// Register a prompt. Re-registering an existing name replaces the
    /// previous entry (last write wins).
    pub fn register_prompt(&mut self, entry: PromptEntry) {
        self.prompts.insert(entry.prompt.name.clone(), entry);
    }

    /// All tool descriptors, sorted by name for stable listings.
    #[must_use]
    pub fn list_tools(&self) -> Vec<Tool> {
        let mut tools: Vec<Tool> = self.tools.values().map(|entry| entry.tool.clone()).collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    /// All resource descriptors, sorted by URI for stable listings.
    #[must_use]
    pub fn list_resources(&self) -> Vec<Resource> {
        let mut resources: Vec<Resource> = self
            .resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect();
        resources.sort_by(|a, b| a.uri.cmp(&b.uri));
        resources
    }

    /// All prompt descriptors, sorted by name for stable listings.
    #[must_use]
    pub fn list_prompts(&self) -> Vec<Prompt> {
        let mut prompts: Vec<Prompt> = self
            .prompts
            .values()
            .map(|entry| entry.prompt.clone())
            .collect();
        prompts.sort_by(|a, b| a.name.cmp(&b.name));
        prompts
    }

    /// Dispatch a tool call by name.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-params error when `name` is not registered,
    /// or with whatever error the handler returns.
    pub async fn call_tool(
        &self,
        state: Arc<AppState>,
        name: &str,
        arguments: Arguments,
    ) -> Result<CallToolResult, ErrorData> {
        state.stats.record_tool_call();
        let result = match self.tools.get(name) {
            Some(entry) => (entry.handler)(Arc::clone(&state), arguments).await,
            None => Err(Self::unknown(CapabilityKind::Tool, name)),
        };
        if result.is_err() {
            state.stats.record_error();
        }
        result
    }

    /// Dispatch a resource read by URI.
    ///
    /// # Errors
    ///
    /// Fails with a resource-not-found error when `uri` is not registered,
    /// or with whatever error the handler returns.
    pub async fn read_resource(
        &self,
        state: Arc<AppState>,
        uri: &str,
    ) -> Result<ReadResourceResult, ErrorData> {
        state.stats.record_resource_read();
        let result = match self.resources.get(uri) {
            Some(entry) => (entry.handler)(Arc::clone(&state), uri.to_owned()).await,
            None => Err(Self::unknown(CapabilityKind::Resource, uri)),
        };
        if result.is_err() {
            state.stats.record_error();
        }
        result
    }

    /// Dispatch a prompt render by name.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-params error when `name` is not registered,
    /// or with whatever error the handler returns.
    pub async fn get_prompt(
        &self,
        state: Arc<AppState>,
        name: &str,
        arguments: Option<Arguments>,
    ) -> Result<GetPromptResult, ErrorData> {
        state.stats.record_prompt_render();
        let result = match self.prompts.get(name) {
            Some(entry) => (entry.handler)(Arc::clone(&state), arguments).await,
            None => Err(Self::unknown(CapabilityKind::Prompt, name)),
        };
        if result.is_err() {
            state.stats.record_error();
        }
        result
    }

    /// The single "unknown identifier" path shared by all three kinds.
    ///
    /// Resources use the protocol's resource-not-found code; tools and
    /// prompts fail as invalid params, the code clients receive for a
    /// request naming something the server never advertised.
    fn unknown(kind: CapabilityKind, id: &str) -> ErrorData {
        match kind {
            CapabilityKind::Tool => {
                ErrorData::invalid_params(format!("unknown tool: {id}"), None)
            }
            CapabilityKind::Prompt => {
                ErrorData::invalid_params(format!("unknown prompt: {id}"), None)
            }
            CapabilityKind::Resource => {
                ErrorData::resource_not_found(format!("unknown resource URI: {id}"), None)
            }
        }
    }
}
