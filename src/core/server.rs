//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tool registry and router.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per
//! tool. The ToolRouter is built dynamically in `domains/tools/router.rs`,
//! so adding a tool does not require modifying this file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::storage::PromptStore;
use crate::domains::tools::build_tool_router;

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp and owns the prompt
/// store shared by all tools.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared prompt storage.
    store: Arc<PromptStore>,

    /// Tool router for handling tool calls over STDIO.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let store = Arc::new(PromptStore::new(config.storage.root.clone()));

        Self {
            tool_router: build_tool_router::<Self>(store.clone()),
            config,
            store,
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

    /// Get the shared prompt store.
    pub fn store(&self) -> &Arc<PromptStore> {
        &self.store
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools with their schemas (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "title": t.title,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                    "outputSchema": t.output_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Always yields a well-formed envelope; the serialization itself is
    /// the only way this can fail.
    #[cfg(feature = "http")]
    pub fn call_tool(&self, name: &str, arguments: serde_json::Value) -> serde_json::Value {
        let registry = ToolRegistry::new(self.store.clone());
        let result = registry.invoke(name, arguments);
        serde_json::to_value(&result).unwrap_or_else(|e| {
            serde_json::json!({
                "content": [{"type": "text", "text": format!("Failed to serialize result: {}", e)}],
                "isError": true
            })
        })
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Prompt storage server. Prompts are text files organized by category; \
                 use the help tool for usage details."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_server() -> (TempDir, McpServer) {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.storage.root = temp_dir.path().join("prompts");
        (temp_dir, McpServer::new(config))
    }

    #[test]
    fn test_list_tools_advertises_schemas() {
        let (_tmp, server) = test_server();
        let tools = server.list_tools();
        assert_eq!(tools.len(), 6);
        for tool in &tools {
            assert!(tool["inputSchema"].is_object());
            assert!(tool["outputSchema"].is_object());
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_call_tool_unknown_is_error_envelope() {
        let (_tmp, server) = test_server();
        let value = server.call_tool("no_such_tool", serde_json::json!({}));
        assert_eq!(value["isError"], true);
        assert_eq!(value["structuredContent"]["error"]["kind"], "unknown_tool");
    }
}
