//! List categories tool definition.
//!
//! Enumerates the category directories under the prompts root.

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

/// Parameters for the list categories tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListCategoriesParams {}

/// Result of a list categories operation.
#[derive(Debug, Serialize, JsonSchema)]
struct ListCategoriesResult {
    /// Sorted category names.
    categories: Vec<String>,
    /// Whether the operation succeeded.
    success: bool,
}

/// List categories tool - lists available prompt categories.
pub struct ListCategoriesTool;

impl ListCategoriesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_categories";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the available prompt categories.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(_params: &ListCategoriesParams, store: &PromptStore) -> CallToolResult {
        match store.list_categories() {
            Ok(categories) => {
                let summary = if categories.is_empty() {
                    "No categories yet.".to_string()
                } else {
                    format!("Categories: {}", categories.join(", "))
                };
                let result = ListCategoriesResult {
                    categories,
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
                warn!("Failed to list categories: {}", e);
                ToolError::from(e).into_call_result()
            }
        }
    }

    /// Dispatch entry point: parse untyped arguments, then execute.
    pub fn invoke(arguments: serde_json::Value, store: &PromptStore) -> CallToolResult {
        match serde_json::from_value::<ListCategoriesParams>(arguments) {
            Ok(params) => Self::execute(&params, store),
            Err(e) => ToolError::invalid_arguments(e.to_string()).into_call_result(),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ListCategoriesParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<ListCategoriesResult>().into()),
            icons: None,
            meta: None,
            title: Some("List Categories".into()),
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
