//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the
//! MCP server:
//!
//! - **storage**: filesystem-backed prompt storage under one root directory
//! - **tools**: the tool registry and the six prompt CRUD tools

pub mod storage;
pub mod tools;
