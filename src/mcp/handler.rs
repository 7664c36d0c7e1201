//! MCP server handler and shared application state.

use std::future::Future;
use std::sync::Arc;

use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, GetPromptRequestParam, GetPromptResult, Implementation,
    ListPromptsResult, ListResourcesResult, ListToolsResult, PaginatedRequestParam,
    ProtocolVersion, ReadResourceRequestParam, ReadResourceResult, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use tracing::{debug, info_span, Instrument};

use crate::config::GlobalConfig;
use crate::mcp::registry::CapabilityRegistry;
use crate::stats::ServerStats;

/// Shared application state accessible by every capability handler.
pub struct AppState {
    /// Global configuration, constructed in `main` and passed down.
    pub config: Arc<GlobalConfig>,
    /// Operational counters behind `data://stats`.
    pub stats: Arc<ServerStats>,
}

impl AppState {
    /// Create shared state from configuration, with fresh counters.
    #[must_use]
    pub fn new(config: Arc<GlobalConfig>) -> Self {
        Self {
            config,
            stats: Arc::new(ServerStats::new()),
        }
    }
}

/// MCP server exposing the workbench tools, resources, and prompts.
pub struct WorkbenchServer {
    state: Arc<AppState>,
    registry: Arc<CapabilityRegistry>,
}

impl WorkbenchServer {
    /// Create a server with the built-in capability set.
    #[must_use]
    pub fn new(state: Arc<AppState>) -> Self {
        Self::with_registry(state, Arc::new(CapabilityRegistry::builtin()))
    }

    /// Create a server over an explicit registry.
    #[must_use]
    pub fn with_registry(state: Arc<AppState>, registry: Arc<CapabilityRegistry>) -> Self {
        Self { state, registry }
    }

    /// Access the shared application state.
    #[must_use]
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }
}

impl ServerHandler for WorkbenchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Workbench MCP server exposing arithmetic and text-analysis tools, \
                 sample data resources, and reusable prompt templates."
                    .into(),
            ),
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, rmcp::ErrorData>> + Send + '_ {
        let span = info_span!("call_tool", tool = %request.name);
        let state = Arc::clone(&self.state);
        let registry = Arc::clone(&self.registry);

        async move {
            let arguments = request.arguments.unwrap_or_default();
            if state.config.telemetry.capture_arguments {
                debug!(arguments = %serde_json::Value::Object(arguments.clone()), "tool arguments");
            }
            registry.call_tool(state, &request.name, arguments).await
        }
        .instrument(span)
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, rmcp::ErrorData>> + Send + '_ {
        let tools = self.registry.list_tools();
        std::future::ready(Ok(ListToolsResult::with_all_items(tools)))
    }

    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListResourcesResult, rmcp::ErrorData>> + Send + '_ {
        let resources = self.registry.list_resources();
        std::future::ready(Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        }))
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ReadResourceResult, rmcp::ErrorData>> + Send + '_ {
        let span = info_span!("read_resource", uri = %request.uri);
        let state = Arc::clone(&self.state);
        let registry = Arc::clone(&self.registry);

        async move { registry.read_resource(state, &request.uri).await }.instrument(span)
    }

    fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListPromptsResult, rmcp::ErrorData>> + Send + '_ {
        let prompts = self.registry.list_prompts();
        std::future::ready(Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        }))
    }

    fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<GetPromptResult, rmcp::ErrorData>> + Send + '_ {
        let span = info_span!("get_prompt", prompt = %request.name);
        let state = Arc::clone(&self.state);
        let registry = Arc::clone(&self.registry);

        async move {
            if state.config.telemetry.capture_arguments {
                if let Some(ref arguments) = request.arguments {
                    debug!(arguments = %serde_json::Value::Object(arguments.clone()), "prompt arguments");
                }
            }
            registry.get_prompt(state, &request.name, request.arguments).await
        }
        .instrument(span)
    }
}
