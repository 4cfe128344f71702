//! MCP service exposing the ticket tools

use crate::mcp::handlers::tickets;
use crate::policy;
use crate::storage::TicketStore;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam,
    ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use serde_json::Value;
use std::sync::Arc;

/// Tool service backing one agent session
///
/// Holds the shared store handle; each tool call is an independent store
/// operation with no session state of its own.
#[derive(Clone)]
pub struct HelpdeskService {
    store: Arc<dyn TicketStore>,
}

impl HelpdeskService {
    /// Create a new service over the given store
    #[must_use]
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self { store }
    }
}

impl ServerHandler for HelpdeskService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(policy::agent_instructions()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: tickets::register_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request
            .arguments
            .map_or(Value::Null, Value::Object);

        match request.name.as_ref() {
            "create_ticket" => Ok(tickets::handle_create_ticket(self.store.as_ref(), args).await),
            "edit_ticket" => Ok(tickets::handle_edit_ticket(self.store.as_ref(), args).await),
            other => Err(McpError::invalid_params(
                format!("unknown tool: {other}"),
                None,
            )),
        }
    }
}
