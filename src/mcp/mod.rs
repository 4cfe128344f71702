//! Tool-calling boundary for the external LLM loop
//!
//! The two ticket tools are exposed over MCP (stdio transport). Every tool
//! returns a single natural-language string, never structured data and never
//! a machine-readable error code; the voice layer speaks results verbatim.

pub mod config;
pub mod handlers;
pub mod server;
pub mod service;

pub use config::McpConfig;
pub use server::McpServer;
pub use service::HelpdeskService;
