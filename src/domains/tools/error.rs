//! Tool-specific error types and the uniform error envelope.
//!
//! Every tool failure is converted into a normal `CallToolResult` with
//! `is_error` set and a structured `{error: {kind, message}}` payload.
//! Nothing here ever surfaces as a transport-level failure.

use rmcp::model::{CallToolResult, Content};
use thiserror::Error;

use crate::domains::storage::StorageError;

/// Errors that can occur during tool dispatch and execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments did not match the tool's input schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The underlying storage operation failed.
    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Short machine-readable tag for the error envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownTool(_) => "unknown_tool",
            Self::InvalidArguments(_) => "invalid_arguments",
            Self::Storage(StorageError::InvalidIdentifier { .. }) => "invalid_identifier",
            Self::Storage(StorageError::PromptNotFound { .. })
            | Self::Storage(StorageError::CategoryNotFound(_)) => "not_found",
            Self::Storage(StorageError::Io(_)) => "io_failure",
        }
    }

    /// Convert into the uniform error envelope returned to callers.
    pub fn into_call_result(self) -> CallToolResult {
        let message = self.to_string();
        CallToolResult {
            content: vec![Content::text(message.clone())],
            structured_content: Some(serde_json::json!({
                "error": { "kind": self.kind(), "message": message }
            })),
            is_error: Some(true),
            meta: None,
        }
    }
}
