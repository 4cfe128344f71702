//! Error types for helpdesk-agent
//!
//! A single crate-wide error enum keeps the failure taxonomy explicit:
//! startup failures (database, configuration) are meant to propagate out of
//! `main`, while the tool layer deliberately converts persistence failures
//! into spoken-style strings and never surfaces this type to the caller.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HelpdeskError>;

/// All errors produced by helpdesk-agent
#[derive(Debug, Error)]
pub enum HelpdeskError {
    /// The backing ticket database could not be reached or queried
    #[error("Ticket database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration file or environment override could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A stored record could not be mapped back into a `Ticket`
    #[error("Corrupt ticket record: {reason}")]
    CorruptRecord { reason: String },

    /// An email address failed the basic format check
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// A field name outside the editable set was supplied
    #[error("'{0}' is not an editable ticket field")]
    InvalidField(String),

    /// Tool arguments failed to deserialize against their schema
    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    /// Failure in the MCP transport or session
    #[error("MCP server error: {0}")]
    Mcp(String),
}

impl HelpdeskError {
    /// Build a corrupt-record error from any displayable cause
    pub fn corrupt(reason: impl std::fmt::Display) -> Self {
        Self::CorruptRecord {
            reason: reason.to_string(),
        }
    }
}
