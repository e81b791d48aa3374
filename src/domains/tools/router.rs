//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for the STDIO transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its
//! own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::storage::PromptStore;

use super::definitions::{
    DeletePromptTool, HelpTool, ListCategoriesTool, ListPromptsTool, LoadPromptTool,
    SavePromptTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(store: Arc<PromptStore>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SavePromptTool::create_route(store.clone()))
        .with_route(ListPromptsTool::create_route(store.clone()))
        .with_route(ListCategoriesTool::create_route(store.clone()))
        .with_route(LoadPromptTool::create_route(store.clone()))
        .with_route(DeletePromptTool::create_route(store))
        .with_route(HelpTool::create_route())
}
