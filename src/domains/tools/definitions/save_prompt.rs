//! Save prompt tool definition.
//!
//! Creates or overwrites a prompt file under the given category.

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

/// Parameters for the save prompt tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SavePromptParams {
    /// Prompt name, used as the filename stem.
    pub name: String,

    /// Category to store the prompt under.
    pub category: String,

    /// Full text content of the prompt.
    pub prompt_content: String,
}

/// Result of a save operation.
#[derive(Debug, Serialize, JsonSchema)]
struct SavePromptResult {
    /// Human-readable confirmation message.
    message: String,
    /// Whether the operation succeeded.
    success: bool,
}

/// Save prompt tool - creates or overwrites a prompt in a category.
pub struct SavePromptTool;

impl SavePromptTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "save_prompt";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Save a prompt under the given category, creating the category if needed. \
         Overwrites any existing prompt with the same name.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(category = %params.category, name = %params.name))]
    pub fn execute(params: &SavePromptParams, store: &PromptStore) -> CallToolResult {
        match store.save(&params.category, &params.name, &params.prompt_content) {
            Ok(()) => {
                let message = format!(
                    "Prompt '{}' saved in category '{}'.",
                    params.name, params.category
                );
                let result = SavePromptResult {
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
                warn!("Failed to save prompt: {}", e);
                ToolError::from(e).into_call_result()
            }
        }
    }

    /// Dispatch entry point: parse untyped arguments, then execute.
    pub fn invoke(arguments: serde_json::Value, store: &PromptStore) -> CallToolResult {
        match serde_json::from_value::<SavePromptParams>(arguments) {
            Ok(params) => Self::execute(&params, store),
            Err(e) => ToolError::invalid_arguments(e.to_string()).into_call_result(),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<SavePromptParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<SavePromptResult>().into()),
            icons: None,
            meta: None,
            title: Some("Save Prompt".into()),
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
    fn test_save_creates_file_and_summary() {
        let (_tmp, store) = test_store();

        let params = SavePromptParams {
            name: "review".to_string(),
            category: "coding".to_string(),
            prompt_content: "Review this code.".to_string(),
        };

        let result = SavePromptTool::execute(&params, &store);
        assert_eq!(result.is_error, Some(false));
        assert!(store.root().join("coding").join("review.md").is_file());

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "Prompt 'review' saved in category 'coding'.");

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["success"], true);
    }

    #[test]
    fn test_save_traversal_rejected() {
        let (tmp, store) = test_store();

        let params = SavePromptParams {
            name: "../escape".to_string(),
            category: "coding".to_string(),
            prompt_content: "x".to_string(),
        };

        let result = SavePromptTool::execute(&params, &store);
        assert_eq!(result.is_error, Some(true));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["error"]["kind"], "invalid_identifier");

        // No file may appear outside the prompts root.
        assert!(!tmp.path().join("coding").exists());
        assert!(!tmp.path().join("escape.md").exists());
    }

    #[test]
    fn test_invoke_missing_field_is_invalid_arguments() {
        let (_tmp, store) = test_store();

        let args = serde_json::json!({ "name": "review", "category": "coding" });
        let result = SavePromptTool::invoke(args, &store);
        assert_eq!(result.is_error, Some(true));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["error"]["kind"], "invalid_arguments");
        assert!(
            structured["error"]["message"]
                .as_str()
                .unwrap()
                .contains("prompt_content")
        );
    }
}
