//! Dujiao admin MCP server library.
//!
//! Exposes the administrative REST API of a Dujiao shop backend as Model
//! Context Protocol tools. Each tool is a declarative definition (name,
//! HTTP method, path template, typed parameters); calling it validates the
//! arguments, builds the HTTP request and returns the backend's JSON.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and the
//!   STDIO/TCP/HTTP transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool table, validation, request building and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use dujiao_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
