//! Prompt store - filesystem-backed storage for prompts.
//!
//! Prompts live at `<root>/<category>/<name>.md`, one file per prompt.
//! Category directories (and the root itself) are created lazily on first
//! save. Concurrent saves to the same prompt are last-write-wins; no
//! locking is performed.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::StorageError;
use super::ident::validate_identifier;

/// File extension for stored prompts.
const PROMPT_EXTENSION: &str = "md";

/// Filesystem-backed prompt storage, scoped under one root directory.
pub struct PromptStore {
    root: PathBuf,
}

impl PromptStore {
    /// Create a store over the given root directory.
    ///
    /// The directory is not created here; it appears on the first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The prompts root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the file path for a prompt after validating both identifiers.
    fn prompt_path(&self, category: &str, name: &str) -> Result<PathBuf, StorageError> {
        validate_identifier("category", category)?;
        validate_identifier("name", name)?;
        Ok(self
            .root
            .join(category)
            .join(format!("{}.{}", name, PROMPT_EXTENSION)))
    }

    /// Write a prompt, creating the category directory if needed.
    /// An existing prompt with the same identity is overwritten.
    pub fn save(&self, category: &str, name: &str, content: &str) -> Result<(), StorageError> {
        let path = self.prompt_path(category, name)?;
        fs::create_dir_all(self.root.join(category))?;
        fs::write(&path, content)?;
        info!("Saved prompt '{}' in category '{}'", name, category);
        Ok(())
    }

    /// Read a prompt's content.
    pub fn load(&self, category: &str, name: &str) -> Result<String, StorageError> {
        let path = self.prompt_path(category, name)?;
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Loaded prompt '{}' from category '{}'", name, category);
                Ok(content)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StorageError::prompt_not_found(category, name))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a prompt. Deleting an absent prompt is `PromptNotFound`.
    pub fn delete(&self, category: &str, name: &str) -> Result<(), StorageError> {
        let path = self.prompt_path(category, name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Deleted prompt '{}' from category '{}'", name, category);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StorageError::prompt_not_found(category, name))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// List prompt names, grouped by category and sorted lexicographically
    /// by category then name.
    ///
    /// With a category, only that category is listed; a missing category
    /// directory is `CategoryNotFound`. Without one, all categories are
    /// listed (a missing root is simply zero categories).
    pub fn list_prompts(
        &self,
        category: Option<&str>,
    ) -> Result<BTreeMap<String, Vec<String>>, StorageError> {
        let mut prompts = BTreeMap::new();

        match category {
            Some(category) => {
                validate_identifier("category", category)?;
                let dir = self.root.join(category);
                if !dir.is_dir() {
                    return Err(StorageError::CategoryNotFound(category.to_string()));
                }
                prompts.insert(category.to_string(), prompt_names_in(&dir)?);
            }
            None => {
                for category in self.list_categories()? {
                    let names = prompt_names_in(&self.root.join(&category))?;
                    prompts.insert(category, names);
                }
            }
        }

        Ok(prompts)
    }

    /// List category names (immediate subdirectories of the root),
    /// lexicographically sorted. A missing or empty root is an empty list.
    pub fn list_categories(&self) -> Result<Vec<String>, StorageError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut categories = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                categories.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        categories.sort();
        Ok(categories)
    }
}

/// Collect sorted prompt names (filename stems of `.md` files) in a
/// category directory.
fn prompt_names_in(dir: &Path) -> Result<Vec<String>, StorageError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        if let Some(stem) = file_name.strip_suffix(&format!(".{}", PROMPT_EXTENSION)) {
            names.push(stem.to_string());
        }
    }
    names.sort();
    Ok(names)
}
