//! Prompt House MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing CRUD
//! operations over text prompts stored as files on disk, organized by
//! category.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the server handler, and the
//!   transport layer (stdio by default, http behind a feature flag)
//! - **domains**: Business logic organized by bounded contexts
//!   - **storage**: the `PromptStore` filesystem accessor
//!   - **tools**: the tool registry and the six prompt CRUD tools
//!
//! # Example
//!
//! ```rust,no_run
//! use prompt_house_mcp::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::storage::PromptStore;
pub use domains::tools::ToolRegistry;
