//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod delete_prompt;
pub mod help;
pub mod list_categories;
pub mod list_prompts;
pub mod load_prompt;
pub mod save_prompt;

pub use delete_prompt::{DeletePromptParams, DeletePromptTool};
pub use help::{HelpParams, HelpTool};
pub use list_categories::{ListCategoriesParams, ListCategoriesTool};
pub use list_prompts::{ListPromptsParams, ListPromptsTool};
pub use load_prompt::{LoadPromptParams, LoadPromptTool};
pub use save_prompt::{SavePromptParams, SavePromptTool};
