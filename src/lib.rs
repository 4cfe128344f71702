//! helpdesk-agent - Ticket backend for a voice-driven IT help desk
//!
//! This crate provides the persistence and tool-calling layer behind a
//! conversational IT support agent:
//! - A ticket store keyed externally by 4-digit confirmation numbers
//! - Two LLM-callable tools (`create_ticket`, `edit_ticket`) served over MCP
//! - The conversation policy (call script and fixed price table) handed to
//!   the external language model
//!
//! The speech pipeline, voice-activity detection, LLM inference, and media
//! transport are external collaborators; this crate only supplies the tools
//! they call and the instructions they follow.
//!
//! # Example
//!
//! ```rust,ignore
//! use helpdesk_agent::storage::{MemoryStore, TicketStore};
//! use helpdesk_agent::mcp::{McpConfig, McpServer};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let server = McpServer::new(McpConfig::default(), store);
//! server.start().await?;
//! ```

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod error;
pub mod mcp;
pub mod policy;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{HelpdeskError, Result};
