//! List prompts tool definition.
//!
//! Lists prompt names grouped by category, either for one category or
//! across all of them.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{instrument, warn};

use crate::domains::storage::PromptStore;
use crate::domains::tools::ToolError;

/// Parameters for the list prompts tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListPromptsParams {
    /// Restrict the listing to this category. Omit to list all categories.
    #[serde(default)]
    pub category: Option<String>,
}

/// Result of a list operation: prompt names grouped by category.
#[derive(Debug, Serialize, JsonSchema)]
struct ListPromptsResult {
    /// Map of category name to sorted prompt names.
    prompts: BTreeMap<String, Vec<String>>,
    /// Whether the operation succeeded.
    success: bool,
}

/// List prompts tool - lists stored prompts by category.
pub struct ListPromptsTool;

impl ListPromptsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_prompts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List prompt names grouped by category. Pass a category to list only that \
         category, or no arguments to list prompts across all categories.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(category = params.category.as_deref().unwrap_or("*")))]
    pub fn execute(params: &ListPromptsParams, store: &PromptStore) -> CallToolResult {
        match store.list_prompts(params.category.as_deref()) {
            Ok(prompts) => {
                let summary = format_listing(&prompts);
                let result = ListPromptsResult {
                    prompts,
                    success: true,
                };
                CallToolResult {
                    content: vec![Content::text(summary)],
                    structured_content: serde_json::to_value(&result).ok(),
                    is_error: Some(false),
                    meta: None,
                }
            }
            Err(e) => {
                warn!("Failed to list prompts: {}", e);
                ToolError::from(e).into_call_result()
            }
        }
    }

    /// Dispatch entry point: parse untyped arguments, then execute.
    pub fn invoke(arguments: serde_json::Value, store: &PromptStore) -> CallToolResult {
        match serde_json::from_value::<ListPromptsParams>(arguments) {
            Ok(params) => Self::execute(&params, store),
            Err(e) => ToolError::invalid_arguments(e.to_string()).into_call_result(),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ListPromptsParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<ListPromptsResult>().into()),
            icons: None,
            meta: None,
            title: Some("List Prompts".into()),
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

/// Render the grouped listing as readable text.
fn format_listing(prompts: &BTreeMap<String, Vec<String>>) -> String {
    if prompts.is_empty() {
        return "No prompts stored yet.".to_string();
    }

    let mut lines = Vec::new();
    for (category, names) in prompts {
        lines.push(format!("{}/", category));
        if names.is_empty() {
            lines.push("  (empty)".to_string());
        }
        for name in names {
            lines.push(format!("  {}", name));
        }
    }
    lines.join("\n")
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
    fn test_list_single_category_omits_others() {
        let (_tmp, store) = test_store();
        store.save("a", "p2", "x").unwrap();
        store.save("a", "p1", "x").unwrap();
        store.save("b", "other", "x").unwrap();

        let params = ListPromptsParams {
            category: Some("a".to_string()),
        };

        let result = ListPromptsTool::execute(&params, &store);
        assert_eq!(result.is_error, Some(false));

        let structured = result.structured_content.unwrap();
        assert_eq!(
            structured["prompts"],
            serde_json::json!({ "a": ["p1", "p2"] })
        );
    }

    #[test]
    fn test_list_all_categories() {
        let (_tmp, store) = test_store();
        store.save("b", "q", "x").unwrap();
        store.save("a", "p", "x").unwrap();

        let params = ListPromptsParams { category: None };
        let result = ListPromptsTool::execute(&params, &store);

        let structured = result.structured_content.unwrap();
        assert_eq!(
            structured["prompts"],
            serde_json::json!({ "a": ["p"], "b": ["q"] })
        );

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert!(text.contains("a/"));
        assert!(text.contains("  p"));
    }

    #[test]
    fn test_list_missing_category_is_not_found() {
        let (_tmp, store) = test_store();

        let params = ListPromptsParams {
            category: Some("ghost".to_string()),
        };

        let result = ListPromptsTool::execute(&params, &store);
        assert_eq!(result.is_error, Some(true));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["error"]["kind"], "not_found");
    }

    #[test]
    fn test_list_empty_root() {
        let (_tmp, store) = test_store();

        let params = ListPromptsParams { category: None };
        let result = ListPromptsTool::execute(&params, &store);
        assert_eq!(result.is_error, Some(false));

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "No prompts stored yet.");
    }

    #[test]
    fn test_invoke_ignores_unknown_fields() {
        let (_tmp, store) = test_store();
        store.save("a", "p", "x").unwrap();

        let args = serde_json::json!({ "category": "a", "verbose": true });
        let result = ListPromptsTool::invoke(args, &store);
        assert_eq!(result.is_error, Some(false));
    }
}
