//! Load prompt tool definition.
//!
//! Reads the content of an existing prompt.

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

/// Parameters for the load prompt tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LoadPromptParams {
    /// Prompt name to load.
    pub name: String,

    /// Category the prompt lives in.
    pub category: String,
}

/// Result of a load operation.
#[derive(Debug, Serialize, JsonSchema)]
struct LoadPromptResult {
    /// The prompt's text content, verbatim.
    content: String,
    /// Whether the operation succeeded.
    success: bool,
}

/// Load prompt tool - reads a prompt's content.
pub struct LoadPromptTool;

impl LoadPromptTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "load_prompt";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Load the content of an existing prompt.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(category = %params.category, name = %params.name))]
    pub fn execute(params: &LoadPromptParams, store: &PromptStore) -> CallToolResult {
        match store.load(&params.category, &params.name) {
            Ok(content) => {
                let result = LoadPromptResult {
                    content: content.clone(),
                    success: true,
                };
                CallToolResult {
                    content: vec![Content::text(content)],
                    structured_content: serde_json::to_value(&result).ok(),
                    is_error: Some(false),
                    meta: None,
                }
            }
            Err(e) => {
                warn!("Failed to load prompt: {}", e);
                ToolError::from(e).into_call_result()
            }
        }
    }

    /// Dispatch entry point: parse untyped arguments, then execute.
    pub fn invoke(arguments: serde_json::Value, store: &PromptStore) -> CallToolResult {
        match serde_json::from_value::<LoadPromptParams>(arguments) {
            Ok(params) => Self::execute(&params, store),
            Err(e) => ToolError::invalid_arguments(e.to_string()).into_call_result(),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<LoadPromptParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<LoadPromptResult>().into()),
            icons: None,
            meta: None,
            title: Some("Load Prompt".into()),
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
    fn test_load_returns_exact_content() {
        let (_tmp, store) = test_store();
        store.save("coding", "review", "Review this code.").unwrap();

        let params = LoadPromptParams {
            name: "review".to_string(),
            category: "coding".to_string(),
        };

        let result = LoadPromptTool::execute(&params, &store);
        assert_eq!(result.is_error, Some(false));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["content"], "Review this code.");
        assert_eq!(structured["success"], true);
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let (_tmp, store) = test_store();

        let params = LoadPromptParams {
            name: "ghost".to_string(),
            category: "coding".to_string(),
        };

        let result = LoadPromptTool::execute(&params, &store);
        assert_eq!(result.is_error, Some(true));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["error"]["kind"], "not_found");
    }

    #[test]
    fn test_invoke_wrong_type_is_invalid_arguments() {
        let (_tmp, store) = test_store();

        let args = serde_json::json!({ "name": 42, "category": "coding" });
        let result = LoadPromptTool::invoke(args, &store);
        assert_eq!(result.is_error, Some(true));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["error"]["kind"], "invalid_arguments");
    }
}
