//! Identifier validation for categories and prompt names.
//!
//! Categories and names are used as single path components under the prompts
//! root. Anything that could resolve to a different directory is rejected
//! outright rather than sanitized, so the (category, name) -> path mapping
//! stays collision-free.

use super::error::StorageError;

/// Validate a category or prompt name as a safe single path component.
///
/// Rejects empty strings, path separators, NUL bytes, and the dot
/// components `.` and `..`.
pub fn validate_identifier(field: &'static str, value: &str) -> Result<(), StorageError> {
    if value.is_empty() {
        return Err(StorageError::invalid_identifier(field, "must not be empty"));
    }

    if value == "." || value == ".." {
        return Err(StorageError::invalid_identifier(
            field,
            format!("'{}' is not a valid {}", value, field),
        ));
    }

    if value.contains('/') || value.contains('\\') {
        return Err(StorageError::invalid_identifier(
            field,
            format!("'{}' must not contain path separators", value),
        ));
    }

    if value.contains('\0') {
        return Err(StorageError::invalid_identifier(
            field,
            "must not contain NUL bytes",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identifiers_accepted() {
        assert!(validate_identifier("category", "coding").is_ok());
        assert!(validate_identifier("name", "rust-review").is_ok());
        assert!(validate_identifier("name", "notes_2024.v1").is_ok());
    }

    #[test]
    fn test_empty_rejected() {
        let err = validate_identifier("category", "").unwrap_err();
        assert!(matches!(
            err,
            StorageError::InvalidIdentifier { field: "category", .. }
        ));
    }

    #[test]
    fn test_traversal_rejected() {
        assert!(validate_identifier("name", "..").is_err());
        assert!(validate_identifier("name", ".").is_err());
        assert!(validate_identifier("name", "../escape").is_err());
        assert!(validate_identifier("category", "a/b").is_err());
        assert!(validate_identifier("category", "a\\b").is_err());
    }

    #[test]
    fn test_nul_rejected() {
        assert!(validate_identifier("name", "bad\0name").is_err());
    }

    #[test]
    fn test_error_names_the_field() {
        let err = validate_identifier("name", "../x").unwrap_err();
        assert!(err.to_string().contains("name"));
    }
}
