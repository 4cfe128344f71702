//! Shared result helpers for tool handlers
//!
//! Tool results carry plain sentences for the conversational layer. An
//! "error" result here means the arguments were rejected before any store
//! call; persistence failures are deliberately reported as *successful*
//! results with apologetic text, so the voice session never sees a hard
//! failure mid-call.

use rmcp::model::{CallToolResult, Content};

/// Create success result
pub fn success_result(message: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(message.into())])
}

/// Create error result
pub fn error_result(error: impl std::fmt::Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {error}"))])
}
