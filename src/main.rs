//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, builds the tool table and starts
//! the server with the configured transport. An inconsistent tool table
//! aborts startup.

use anyhow::{Context, Result};
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use dujiao_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Backend: {:?}", config.backend);

    let transport = TransportService::new(config.transport.clone());

    let server = McpServer::new(config)
        .inspect_err(|e| error!("Startup failed: {}", e))
        .context("failed to initialize MCP server")?;

    info!("Server initialized");

    transport
        .run(server)
        .await
        .context("transport terminated with an error")?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout belongs to the STDIO transport. `RUST_LOG`
/// directives take precedence over the configured level.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
