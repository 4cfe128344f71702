//! helpdesk-agent - Voice IT help desk ticket backend
//!
//! This is the main entry point for the helpdesk-agent binary. It parses
//! command-line arguments, connects the ticket store, and runs the MCP tool
//! server the external voice-agent runtime talks to.

use clap::{Parser, Subcommand};
use helpdesk_agent::config::Config;
use helpdesk_agent::error::Result;
use helpdesk_agent::mcp::McpServer;
use helpdesk_agent::policy;
use helpdesk_agent::storage::{MemoryStore, SqliteStore, TicketStore};
use std::process;
use std::sync::Arc;

/// Ticket backend and LLM tool server for a voice IT help desk
#[derive(Parser)]
#[command(name = "helpdesk-agent", version, about)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the ticket tools over MCP stdio for the voice-agent runtime
    Serve {
        /// Use a non-persistent in-memory store instead of the database
        #[arg(long)]
        memory: bool,

        /// Override the ticket database connection string
        #[arg(long, env = "HELPDESK_DATABASE_URL")]
        database_url: Option<String>,
    },

    /// Print the conversation instructions handed to the language model
    Prompt,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Set up logging
///
/// The MCP transport owns stdout, so log output always goes to stderr.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Dispatch to the requested command
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve {
            memory,
            database_url,
        } => serve(memory, database_url).await,
        Commands::Prompt => {
            print!("{}", policy::agent_instructions());
            Ok(())
        },
    }
}

/// Connect the store and run the tool server until the peer disconnects
///
/// A store that cannot be reached at startup aborts the process; the agent
/// is useless without persistence.
async fn serve(memory: bool, database_url: Option<String>) -> Result<()> {
    let config = Config::load()?;

    let store: Arc<dyn TicketStore> = if memory {
        Arc::new(MemoryStore::new())
    } else {
        let url = database_url.unwrap_or_else(|| config.database.url.clone());
        Arc::new(SqliteStore::connect(&url).await?)
    };

    let server = McpServer::new(config.mcp, store.clone());
    server.start().await?;

    store.close().await?;
    Ok(())
}
