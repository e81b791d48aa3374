//! Storage-specific error types.

use thiserror::Error;

/// Errors that can occur during prompt storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A category or prompt name is empty or would escape the prompts root.
    #[error("Invalid {field}: {reason}")]
    InvalidIdentifier {
        /// Which identifier was rejected ("category" or "name").
        field: &'static str,
        reason: String,
    },

    /// The requested prompt does not exist.
    #[error("Prompt '{name}' not found in category '{category}'")]
    PromptNotFound { category: String, name: String },

    /// The requested category directory does not exist.
    #[error("Category '{0}' not found")]
    CategoryNotFound(String),

    /// Underlying filesystem failure (permissions, disk full, ...).
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Create an "invalid identifier" error for the given field.
    pub fn invalid_identifier(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            field,
            reason: reason.into(),
        }
    }

    /// Create a "prompt not found" error.
    pub fn prompt_not_found(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self::PromptNotFound {
            category: category.into(),
            name: name.into(),
        }
    }
}
