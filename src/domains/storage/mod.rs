//! Storage domain module.
//!
//! This module owns all filesystem-facing prompt operations, scoped under
//! one prompts root directory:
//!
//! - `store.rs` - the `PromptStore` accessor (save/load/delete/list)
//! - `ident.rs` - category and prompt-name validation
//! - `error.rs` - storage-specific error types

mod error;
mod ident;
mod store;

pub use error::StorageError;
pub use ident::validate_identifier;
pub use store::PromptStore;
