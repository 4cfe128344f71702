//! MCP tool handlers

pub mod common;
pub mod schema_helper;
pub mod tickets;
