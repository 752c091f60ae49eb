//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the [`ToolDispatcher`].
//!
//! ## Tool Architecture
//!
//! Tools are data: `domains/tools/definitions/` holds one `ToolDefinition`
//! per admin API call. The ToolRouter is built dynamically from the registry
//! in `domains/tools/router.rs`, so adding a tool never touches this file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::tools::{ToolDispatcher, build_tool_router};

#[cfg(feature = "http")]
use crate::domains::tools::{Invocation, to_call_result};

/// Instructions reported to MCP clients on initialize.
pub const INSTRUCTIONS: &str = "Dujiao shop administration. Each tool maps to one admin REST \
endpoint (products, categories, card secrets, orders, payments, users, content, marketing, \
settings, skills, authorization). Results are the backend's JSON responses. Amounts are in \
cents unless a tool says otherwise; multi-language fields take a map such as \
{\"zh-CN\": \"...\", \"en-US\": \"...\"}.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Cloning is
/// cheap; every clone shares the same dispatcher.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared tool dispatcher.
    dispatcher: ToolDispatcher,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the builtin tool table is inconsistent or the HTTP client
    /// cannot be built.
    pub fn new(config: Config) -> crate::Result<Self> {
        let dispatcher = ToolDispatcher::from_config(&config.backend)?;
        Ok(Self::with_dispatcher(config, dispatcher))
    }

    /// Create a server around an existing dispatcher.
    pub fn with_dispatcher(config: Config, dispatcher: ToolDispatcher) -> Self {
        info!(
            "Serving {} tools against {}",
            dispatcher.registry().len(),
            config.backend.api_root()
        );
        Self {
            tool_router: build_tool_router::<Self>(dispatcher.clone()),
            config: Arc::new(config),
            dispatcher,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool (for HTTP transport).
    ///
    /// Returns the same `CallToolResult` shape as the rmcp router. Dropping
    /// the returned future aborts the backend request.
    #[cfg(feature = "http")]
    #[tracing::instrument(skip_all, fields(tool = %invocation.tool_name))]
    pub async fn call_tool(&self, invocation: Invocation) -> CallToolResult {
        let outcome = self
            .dispatcher
            .invoke(&invocation.tool_name, invocation.arguments)
            .await;
        to_call_result(outcome)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::BackendConfig;

    fn test_server() -> McpServer {
        let config = Config {
            backend: BackendConfig {
                // Nothing listens here; tests below never reach the network.
                base_url: "http://127.0.0.1:9".to_string(),
                ..BackendConfig::default()
            },
            ..Config::default()
        };
        McpServer::new(config).unwrap()
    }

    #[test]
    fn test_server_info() {
        let server = test_server();
        let info = server.get_info();
        assert_eq!(info.server_info.name, "dujiao-admin-mcp");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_list_tools() {
        let server = test_server();
        let tools = server.list_tools();
        assert_eq!(tools.len(), 86);
        let first = tools
            .iter()
            .find(|t| t["name"] == "get_product")
            .unwrap();
        assert_eq!(first["inputSchema"]["properties"]["id"]["type"], "number");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_call_tool_errors_are_results() {
        let server = test_server();

        let unknown = server
            .call_tool(Invocation {
                tool_name: "foo_bar".into(),
                arguments: Default::default(),
            })
            .await;
        assert_eq!(unknown.is_error, Some(true));

        let invalid = server
            .call_tool(Invocation {
                tool_name: "get_order".into(),
                arguments: serde_json::json!({ "id": "seven" })
                    .as_object()
                    .cloned()
                    .unwrap(),
            })
            .await;
        assert_eq!(invalid.is_error, Some(true));
        let text = invalid.content[0].as_text().unwrap().text.clone();
        assert!(text.contains("'id': expected number, got string"));
    }
}
