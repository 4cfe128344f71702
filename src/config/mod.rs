//! Configuration loading
//!
//! Settings come from an optional `helpdesk` config file in the working
//! directory, overridden by `HELPDESK_*` environment variables
//! (e.g. `HELPDESK_DATABASE__URL`). Everything has a local default so the
//! agent runs with zero configuration.

use crate::error::Result;
use crate::mcp::McpConfig;
use serde::{Deserialize, Serialize};

/// Default database connection string: a SQLite file next to the process
pub const DEFAULT_DATABASE_URL: &str = "sqlite://helpdesk.db";

/// Backing-store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string for the ticket database
    #[serde(default = "default_database_url")]
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub mcp: McpConfig,
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// The file is optional; environment variables win over file values.
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("helpdesk").required(false))
            .add_source(
                config::Environment::with_prefix("HELPDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(config.mcp.server.host, "127.0.0.1");
    }

    #[test]
    fn test_deserialize_partial_config() {
        // A file that only sets the database URL leaves the rest at defaults
        let config: Config =
            serde_json::from_str(r#"{"database": {"url": "sqlite://tickets.db"}}"#).unwrap();
        assert_eq!(config.database.url, "sqlite://tickets.db");
        assert_eq!(config.mcp.server.host, "127.0.0.1");
    }
}
