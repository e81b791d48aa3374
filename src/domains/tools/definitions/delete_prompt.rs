//! Delete prompt tool definition.
//!
//! Removes an existing prompt file. Categories are never deleted, even when
//! their last prompt is removed.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{instrument, warn};

use crate::domains::storage::PromptStore;
use crate::domains::tools::ToolError;

/// Parameters for the delete prompt tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeletePromptParams {
    /// Prompt name to delete.
    pub name: String,

    /// Category the prompt lives in.
    pub category: String,
}

/// Result of a delete operation.
#[derive(Debug, Serialize, JsonSchema)]
struct DeletePromptResult {
    /// Human-readable confirmation message.
    message: String,
    /// Whether the operation succeeded.
    success: bool,
}

/// Delete prompt tool - removes a prompt from a category.
pub struct DeletePromptTool;

impl DeletePromptTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_prompt";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete an existing prompt from a category.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(category = %params.category, name = %params.name))]
    pub fn execute(params: &DeletePromptParams, store: &PromptStore) -> CallToolResult {
        match store.delete(&params.category, &params.name) {
            Ok(()) => {
                let message = format!(
                    "Prompt '{}' deleted from category '{}'.",
                    params.name, params.category
                );
                let result = DeletePromptResult {
                    message: message.clone(),
                    success: true,
                };
                CallToolResult {
                    content: vec![Content::text(message)],
                    structured_content: serde_json::to_value(&result).ok(),
                    is_error: Some(false),
                    meta: None,
                }
            }
            Err(e) => {
                warn!("Failed to delete prompt: {}", e);
                ToolError::from(e).into_call_result()
            }
        }
    }

    /// Dispatch entry point: parse untyped arguments, then execute.
    pub fn invoke(arguments: serde_json::Value, store: &PromptStore) -> CallToolResult {
        match serde_json::from_value::<DeletePromptParams>(arguments) {
            Ok(params) => Self::execute(&params, store),
            Err(e) => ToolError::invalid_arguments(e.to_string()).into_call_result(),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<DeletePromptParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<DeletePromptResult>().into()),
            icons: None,
            meta: None,
            title: Some("Delete Prompt".into()),
        }
    }

    /// Create a ToolRoute for the STDIO transport.
    pub fn create_route<S>(store: Arc<PromptStore>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let store = store.clone();
            async move { Ok(Self::invoke(serde_json::Value::Object(args), &store)) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, PromptStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = PromptStore::new(temp_dir.path().join("prompts"));
        (temp_dir, store)
    }

    #[test]
    fn test_delete_removes_file() {
        let (_tmp, store) = test_store();
        store.save("coding", "review", "x").unwrap();

        let params = DeletePromptParams {
            name: "review".to_string(),
            category: "coding".to_string(),
        };

        let result = DeletePromptTool::execute(&params, &store);
        assert_eq!(result.is_error, Some(false));
        assert!(!store.root().join("coding").join("review.md").exists());

        // Category directory survives the delete.
        assert!(store.root().join("coding").is_dir());
    }

    #[test]
    fn test_delete_twice_second_is_not_found() {
        let (_tmp, store) = test_store();
        store.save("coding", "review", "x").unwrap();

        let params = DeletePromptParams {
            name: "review".to_string(),
            category: "coding".to_string(),
        };

        let first = DeletePromptTool::execute(&params, &store);
        assert_eq!(first.is_error, Some(false));

        let second = DeletePromptTool::execute(&params, &store);
        assert_eq!(second.is_error, Some(true));
        let structured = second.structured_content.unwrap();
        assert_eq!(structured["error"]["kind"], "not_found");
    }

    #[test]
    fn test_delete_traversal_rejected() {
        let (_tmp, store) = test_store();

        let params = DeletePromptParams {
            name: "../../etc/passwd".to_string(),
            category: "coding".to_string(),
        };

        let result = DeletePromptTool::execute(&params, &store);
        assert_eq!(result.is_error, Some(true));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["error"]["kind"], "invalid_identifier");
    }
}
