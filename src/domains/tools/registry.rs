//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - `invoke()`, the single dispatch entry point taking a tool name and
//!   untyped arguments and always returning a well-formed envelope
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use tracing::warn;

use crate::domains::storage::PromptStore;

use super::ToolError;
use super::definitions::{
    DeletePromptTool, HelpTool, ListCategoriesTool, ListPromptsTool, LoadPromptTool,
    SavePromptTool,
};

/// Tool registry - manages all available tools.
///
/// The registry is fixed at startup and read-only afterwards; dispatch is
/// stateless across invocations.
pub struct ToolRegistry {
    store: Arc<PromptStore>,
}

impl ToolRegistry {
    /// Create a new tool registry over the given prompt store.
    pub fn new(store: Arc<PromptStore>) -> Self {
        Self { store }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            SavePromptTool::NAME,
            ListPromptsTool::NAME,
            ListCategoriesTool::NAME,
            LoadPromptTool::NAME,
            DeletePromptTool::NAME,
            HelpTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both the HTTP and STDIO transports use this to advertise tools.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SavePromptTool::to_tool(),
            ListPromptsTool::to_tool(),
            ListCategoriesTool::to_tool(),
            LoadPromptTool::to_tool(),
            DeletePromptTool::to_tool(),
            HelpTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Always returns a well-formed envelope: unknown tools, argument-shape
    /// failures, and storage failures all come back as error envelopes,
    /// never as panics or transport-level failures.
    pub fn invoke(&self, name: &str, arguments: serde_json::Value) -> CallToolResult {
        match name {
            SavePromptTool::NAME => SavePromptTool::invoke(arguments, &self.store),
            ListPromptsTool::NAME => ListPromptsTool::invoke(arguments, &self.store),
            ListCategoriesTool::NAME => ListCategoriesTool::invoke(arguments, &self.store),
            LoadPromptTool::NAME => LoadPromptTool::invoke(arguments, &self.store),
            DeletePromptTool::NAME => DeletePromptTool::invoke(arguments, &self.store),
            HelpTool::NAME => HelpTool::invoke(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                ToolError::unknown_tool(name).into_call_result()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_registry() -> (TempDir, ToolRegistry) {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(PromptStore::new(temp_dir.path().join("prompts")));
        (temp_dir, ToolRegistry::new(store))
    }

    #[test]
    fn test_registry_tool_names() {
        let (_tmp, registry) = test_registry();
        let names = registry.tool_names();
        assert_eq!(names.len(), 6);
        assert!(names.contains(&"save_prompt"));
        assert!(names.contains(&"list_prompts"));
        assert!(names.contains(&"list_categories"));
        assert!(names.contains(&"load_prompt"));
        assert!(names.contains(&"delete_prompt"));
        assert!(names.contains(&"help"));
    }

    #[test]
    fn test_get_all_tools_declares_schemas() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 6);
        for tool in &tools {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
            assert!(tool.output_schema.is_some(), "{} has no output schema", tool.name);
        }
    }

    #[test]
    fn test_invoke_unknown_tool_is_envelope_not_panic() {
        let (_tmp, registry) = test_registry();

        let result = registry.invoke("no_such_tool", serde_json::json!({}));
        assert_eq!(result.is_error, Some(true));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["error"]["kind"], "unknown_tool");
    }

    #[test]
    fn test_invoke_save_then_load_roundtrip() {
        let (_tmp, registry) = test_registry();

        let save = registry.invoke(
            "save_prompt",
            serde_json::json!({
                "name": "review",
                "category": "coding",
                "prompt_content": "Review this code."
            }),
        );
        assert_eq!(save.is_error, Some(false));

        let load = registry.invoke(
            "load_prompt",
            serde_json::json!({ "name": "review", "category": "coding" }),
        );
        assert_eq!(load.is_error, Some(false));
        let structured = load.structured_content.unwrap();
        assert_eq!(structured["content"], "Review this code.");
    }

    #[test]
    fn test_invoke_missing_argument_names_field() {
        let (_tmp, registry) = test_registry();

        let result = registry.invoke(
            "load_prompt",
            serde_json::json!({ "category": "coding" }),
        );
        assert_eq!(result.is_error, Some(true));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["error"]["kind"], "invalid_arguments");
        assert!(
            structured["error"]["message"]
                .as_str()
                .unwrap()
                .contains("name")
        );
    }

    #[test]
    fn test_invoke_help_without_storage() {
        let (_tmp, registry) = test_registry();

        let result = registry.invoke("help", serde_json::json!({}));
        assert_eq!(result.is_error, Some(false));
        // Help must not create the prompts root.
        assert!(!_tmp.path().join("prompts").exists());
    }
}
