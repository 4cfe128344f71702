//! MCP server implementation

use crate::error::{HelpdeskError, Result};
use crate::mcp::{HelpdeskService, McpConfig};
use crate::storage::TicketStore;
use rmcp::ServiceExt;
use std::sync::Arc;
use tracing::info;

/// MCP server for the help-desk ticket tools
pub struct McpServer {
    /// Server configuration
    config: McpConfig,

    /// Storage backend
    store: Arc<dyn TicketStore>,
}

impl McpServer {
    /// Create a new MCP server
    #[must_use]
    pub fn new(config: McpConfig, store: Arc<dyn TicketStore>) -> Self {
        Self { config, store }
    }

    /// Start the MCP server
    pub async fn start(&self) -> Result<()> {
        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);

        info!("Starting MCP server on {}", addr);

        // For now, we'll use stdio transport
        // TODO: Implement TCP transport
        self.start_stdio().await
    }

    /// Start server with stdio transport
    pub async fn start_stdio(&self) -> Result<()> {
        info!("Starting MCP server with stdio transport");

        // Create service
        let service = HelpdeskService::new(self.store.clone());

        // Create stdio transport
        let transport = (tokio::io::stdin(), tokio::io::stdout());

        // Serve the service
        let server = service
            .serve(transport)
            .await
            .map_err(|e| HelpdeskError::Mcp(e.to_string()))?;

        info!("MCP server started successfully");

        // Wait for the server to complete
        server
            .waiting()
            .await
            .map_err(|e| HelpdeskError::Mcp(e.to_string()))?;
        info!("MCP server shut down");

        Ok(())
    }
}
