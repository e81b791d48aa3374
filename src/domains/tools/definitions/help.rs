//! Help tool definition.
//!
//! Returns static usage instructions. Touches no storage.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domains::tools::ToolError;

/// Parameters for the help tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct HelpParams {}

/// Result of a help call.
#[derive(Debug, Serialize, JsonSchema)]
struct HelpResult {
    /// Usage lines, one step per entry.
    help: Vec<String>,
    /// Whether the operation succeeded.
    success: bool,
}

/// Usage instructions, one line per step.
const HELP_LINES: &[&str] = &[
    "Using the prompt-house MCP server:",
    "1) list_categories {} - see the available categories",
    "2) list_prompts {\"category\": <cat>} - see prompts in one category",
    "3) list_prompts {} - see prompts across all categories, grouped",
    "4) save_prompt {\"name\": <n>, \"category\": <c>, \"prompt_content\": <text>} - create or overwrite",
    "5) load_prompt {\"name\": <n>, \"category\": <c>} - read a prompt's content",
    "6) delete_prompt {\"name\": <n>, \"category\": <c>} - remove a prompt",
];

/// Help tool - describes how to use the server.
pub struct HelpTool;

impl HelpTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "help";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Show usage instructions for the prompt tools.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(_params: &HelpParams) -> CallToolResult {
        let help: Vec<String> = HELP_LINES.iter().map(|s| s.to_string()).collect();
        let summary = help.join("\n");
        let result = HelpResult {
            help,
            success: true,
        };
        CallToolResult {
            content: vec![Content::text(summary)],
            structured_content: serde_json::to_value(&result).ok(),
            is_error: Some(false),
            meta: None,
        }
    }

    /// Dispatch entry point: parse untyped arguments, then execute.
    pub fn invoke(arguments: serde_json::Value) -> CallToolResult {
        match serde_json::from_value::<HelpParams>(arguments) {
            Ok(params) => Self::execute(&params),
            Err(e) => ToolError::invalid_arguments(e.to_string()).into_call_result(),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<HelpParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<HelpResult>().into()),
            icons: None,
            meta: None,
            title: Some("Help".into()),
        }
    }

    /// Create a ToolRoute for the STDIO transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move { Ok(Self::invoke(serde_json::Value::Object(args))) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_tool() {
        let result = HelpTool::execute(&HelpParams::default());
        assert_eq!(result.is_error, Some(false));

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        for tool in [
            "save_prompt",
            "list_prompts",
            "list_categories",
            "load_prompt",
            "delete_prompt",
        ] {
            assert!(text.contains(tool), "help text misses {}", tool);
        }

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["success"], true);
        assert!(structured["help"].as_array().unwrap().len() >= 6);
    }
}
